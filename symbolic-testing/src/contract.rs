//! Reusable checks that a symbol factory honours the symbol contract.
//!
//! Each check takes the factory itself, so a new symbol variant can be certified with the
//! same code as the existing ones. [`test_symbol_variant!`](crate::test_symbol_variant)
//! wraps all of them into a test module.

use std::sync::Arc;

use rand::SeedableRng;
use rand::distr::Distribution;
use rand::rngs::SmallRng;
use spop_symbolic::{InvalidNameError, Operand, Symbol};

use crate::ValidSymbolName;

const SAMPLES: usize = 256;

fn sample_names(seed: u64) -> impl Iterator<Item = String> {
    ValidSymbolName::default()
        .sample_iter(SmallRng::seed_from_u64(seed))
        .take(SAMPLES)
}

/// Valid names round-trip, and the degree and renderings are those of `variant`.
pub fn test_symbol_contract<S, F>(factory: F, variant: &str, degree: u32)
where
    S: Symbol + ?Sized,
    F: Fn(&str) -> Result<Arc<S>, InvalidNameError>,
{
    for name in sample_names(1).chain([String::new()]) {
        let symbol = factory(&name).unwrap();
        assert_eq!(symbol.name(), name);
        assert_eq!(symbol.degree(), degree);
        assert_eq!(format!("{symbol:?}"), format!("{variant}({name})"));
        assert_eq!(symbol.to_string(), name);
        assert_eq!(symbol.repr(), format!("{variant}({name})"));
        assert_eq!(symbol.pretty(), name);
    }
}

/// Identity holds exactly between symbols built by `factory` from equal names, and never
/// towards symbols from `other` or towards scalars.
pub fn test_identity_contract<S, T, F, G>(factory: F, other: G)
where
    S: Symbol + ?Sized,
    T: Symbol + ?Sized,
    F: Fn(&str) -> Result<Arc<S>, InvalidNameError>,
    G: Fn(&str) -> Result<Arc<T>, InvalidNameError>,
{
    let names: Vec<String> = sample_names(2).collect();
    for (a, b) in names.iter().zip(names.iter().rev()) {
        let x = factory(a).unwrap();
        let same = factory(a).unwrap();
        let y = factory(b).unwrap();
        let foreign = other(a).unwrap();

        assert!(x.identical_to(Operand::from(&*same)));
        assert_eq!(x.identical_to(Operand::from(&*y)), a == b);
        assert!(!x.identical_to(Operand::from(&*foreign)));
        assert!(!foreign.identical_to(Operand::from(&*x)));
        assert!(!x.identical_to(Operand::from(0)));
        assert!(!x.identical_to(Operand::from(a.len() as f64)));
    }
}

/// Names containing a character outside the charset are refused with the offending
/// character reported.
pub fn test_rejects_invalid_names<S, F>(factory: F)
where
    S: Symbol + ?Sized,
    F: Fn(&str) -> Result<Arc<S>, InvalidNameError>,
{
    for name in ["a b", "x-1", "x.y", "\u{3b1}", "tab\t", "new\nline", "caf\u{e9}"] {
        let err = factory(name).unwrap_err();
        assert_eq!(err.name(), name);
        assert!(name[err.offset()..].starts_with(err.invalid()));
    }
}

#[macro_export]
macro_rules! test_symbol_variant {
    ($mod:ident, $factory:path, $other:path, $variant:literal, $degree:expr) => {
        mod $mod {
            #[test]
            fn symbol_contract() {
                $crate::test_symbol_contract($factory, $variant, $degree);
            }

            #[test]
            fn identity_contract() {
                $crate::test_identity_contract($factory, $other);
            }

            #[test]
            fn rejects_invalid_names() {
                $crate::test_rejects_invalid_names($factory);
            }
        }
    };
}
