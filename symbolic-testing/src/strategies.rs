use std::fmt;

use proptest::prelude::*;
use spop_symbolic::{
    LinSymbolRef, Operand, ParamSymbolRef, ScalarLit, VALID_NAME_CHARS,
    is_valid_name_char, unbound_lin_symbol, unbound_param_symbol,
};

/// Longest name the strategies below generate.
pub const MAX_GENERATED_NAME_LEN: usize = 24;

/// Names built only from [`VALID_NAME_CHARS`], including the empty name.
pub fn valid_symbol_name() -> impl Strategy<Value = String> {
    let chars: Vec<char> = VALID_NAME_CHARS.chars().collect();
    prop::collection::vec(prop::sample::select(chars), 0..=MAX_GENERATED_NAME_LEN)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A character no symbol name may contain.
pub fn invalid_name_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must fall outside the symbol charset", |c| {
        !is_valid_name_char(*c)
    })
}

/// Names containing at least one character outside [`VALID_NAME_CHARS`].
pub fn invalid_symbol_name() -> impl Strategy<Value = String> {
    (valid_symbol_name(), invalid_name_char(), any::<String>()).prop_map(
        |(prefix, invalid, suffix)| {
            let mut name = prefix;
            name.push(invalid);
            name.push_str(&suffix);
            name
        },
    )
}

/// Any string at all, valid as a name or not.
pub fn arbitrary_name() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Names of at most two characters over `x` and `y`, so independently drawn names collide often.
pub fn small_symbol_name() -> impl Strategy<Value = String> {
    "[xy]{0,2}"
}

pub fn lin_symbol_from(
    names: impl Strategy<Value = String>,
) -> impl Strategy<Value = LinSymbolRef> {
    names.prop_filter_map("valid names build a symbol", |name| {
        unbound_lin_symbol(&name).ok()
    })
}

pub fn param_symbol_from(
    names: impl Strategy<Value = String>,
) -> impl Strategy<Value = ParamSymbolRef> {
    names.prop_filter_map("valid names build a symbol", |name| {
        unbound_param_symbol(&name).ok()
    })
}

pub fn lin_symbol() -> impl Strategy<Value = LinSymbolRef> {
    lin_symbol_from(valid_symbol_name())
}

pub fn param_symbol() -> impl Strategy<Value = ParamSymbolRef> {
    param_symbol_from(valid_symbol_name())
}

pub fn scalar_lit() -> impl Strategy<Value = ScalarLit> {
    prop_oneof![
        any::<i64>().prop_map(ScalarLit::Int),
        any::<f64>().prop_map(ScalarLit::Float),
    ]
}

/// Anything a symbolic object can be compared against.
#[derive(Clone)]
pub enum ArbitraryObject {
    Lin(LinSymbolRef),
    Param(ParamSymbolRef),
    Scalar(ScalarLit),
}

impl ArbitraryObject {
    pub fn as_operand(&self) -> Operand<'_> {
        match self {
            Self::Lin(symbol) => Operand::from(&**symbol),
            Self::Param(symbol) => Operand::from(&**symbol),
            Self::Scalar(scalar) => Operand::from(*scalar),
        }
    }

    /// The symbol's name, or `None` for scalars.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Lin(symbol) => Some(symbol.name()),
            Self::Param(symbol) => Some(symbol.name()),
            Self::Scalar(_) => None,
        }
    }
}

impl fmt::Debug for ArbitraryObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lin(symbol) => fmt::Debug::fmt(symbol, f),
            Self::Param(symbol) => fmt::Debug::fmt(symbol, f),
            Self::Scalar(scalar) => fmt::Debug::fmt(scalar, f),
        }
    }
}

/// A symbol of any variant, or a scalar literal.
///
/// Names come from [`small_symbol_name`], so symbols of different variants often share a name.
pub fn symbolic_object() -> impl Strategy<Value = ArbitraryObject> {
    prop_oneof![
        lin_symbol_from(small_symbol_name()).prop_map(ArbitraryObject::Lin),
        param_symbol_from(small_symbol_name()).prop_map(ArbitraryObject::Param),
        scalar_lit().prop_map(ArbitraryObject::Scalar),
    ]
}

#[cfg(test)]
mod tests {
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;
    use spop_symbolic::validate_name;

    use super::*;

    #[test]
    fn test_small_names_hit_both_identity_outcomes() {
        let mut runner = TestRunner::deterministic();
        let lin = lin_symbol_from(small_symbol_name());
        let mut identical = 0;
        let mut distinct = 0;
        for _ in 0..256 {
            let it = lin.new_tree(&mut runner).unwrap().current();
            let other = symbolic_object().new_tree(&mut runner).unwrap().current();
            if it.identical_to(other.as_operand()) {
                identical += 1;
            } else {
                distinct += 1;
            }
        }

        // 7 names and 3 kinds of object: identical pairs come up about once in 21 draws.
        assert!(identical > 0);
        assert!(distinct > 0);
    }

    proptest! {
        #[test]
        fn proptest_valid_names_validate(name in valid_symbol_name()) {
            prop_assert!(name.len() <= MAX_GENERATED_NAME_LEN);
            prop_assert!(validate_name(&name).is_ok());
        }

        #[test]
        fn proptest_invalid_names_fail(name in invalid_symbol_name()) {
            prop_assert!(validate_name(&name).is_err());
        }

        #[test]
        fn proptest_symbols_keep_generated_names(x in lin_symbol(), c in param_symbol()) {
            prop_assert!(validate_name(x.name()).is_ok());
            prop_assert!(validate_name(c.name()).is_ok());
        }

        #[test]
        fn proptest_object_operands(object in symbolic_object()) {
            let operand = object.as_operand();
            prop_assert_eq!(operand.is_scalar(), object.name().is_none());
        }
    }
}
