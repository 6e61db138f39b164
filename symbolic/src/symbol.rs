use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use tracing::{debug, trace};

use crate::error::InvalidNameError;
use crate::expr::{Constant, Expr, FixedDegree, LinExpr, Linear, ParamExpr};
use crate::object::SymbolicObject;
use crate::sealed::{Sealed, Variant};

/// Characters a symbol name may be built from: ASCII letters, ASCII digits and underscore.
pub const VALID_NAME_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// A named atomic expression.
pub trait Symbol: Expr {
    fn name(&self) -> &str;
}

/// A linear symbol, that is, of degree 1.
pub trait LinSymbol: Symbol + LinExpr {}

impl<T: Symbol + LinExpr> LinSymbol for T {}

/// A pure-parameter symbol, that is, of degree 0.
pub trait ParamSymbol: Symbol + ParamExpr {}

impl<T: Symbol + ParamExpr> ParamSymbol for T {}

pub type LinSymbolRef = Arc<dyn LinSymbol>;
pub type ParamSymbolRef = Arc<dyn ParamSymbol>;

#[inline]
pub fn is_valid_name_char(c: char) -> bool {
    VALID_NAME_CHARS.contains(c)
}

/// Checks that every character of `name` is one of [`VALID_NAME_CHARS`].
///
/// The check is case-sensitive and applies no normalization or length limit. The empty
/// string has no characters and so is accepted.
pub fn validate_name(name: &str) -> Result<(), InvalidNameError> {
    match name.char_indices().find(|&(_, c)| !is_valid_name_char(c)) {
        Some((offset, invalid)) => {
            debug!(name, %invalid, offset, "rejected symbol name");
            Err(InvalidNameError::new(name, invalid, offset))
        }
        None => Ok(()),
    }
}

/// Creates a linear symbol named `name`.
///
/// # Errors
///
/// Returns [`InvalidNameError`] if `name` contains a character outside [`VALID_NAME_CHARS`].
pub fn unbound_lin_symbol(name: &str) -> Result<LinSymbolRef, InvalidNameError> {
    validate_name(name)?;
    trace!(name, "created lin symbol");
    Ok(Arc::new(UnboundLinSymbol { name: name.into() }))
}

/// Creates a parameter symbol named `name`.
///
/// # Errors
///
/// Returns [`InvalidNameError`] if `name` contains a character outside [`VALID_NAME_CHARS`].
pub fn unbound_param_symbol(name: &str) -> Result<ParamSymbolRef, InvalidNameError> {
    validate_name(name)?;
    trace!(name, "created param symbol");
    Ok(Arc::new(UnboundParamSymbol { name: name.into() }))
}

macro_rules! unbound_symbol {
    ($name:ident, $variant:ident, $class:ty) => {
        struct $name {
            name: Box<str>,
        }

        impl Sealed for $name {
            fn variant(&self) -> Variant<'_> {
                Variant::$variant(&self.name)
            }
        }

        impl SymbolicObject for $name {}

        impl FixedDegree for $name {
            type Class = $class;
        }

        impl Symbol for $name {
            fn name(&self) -> &str {
                &self.name
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($variant), "({})"), self.name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.name)
            }
        }
    };
}

unbound_symbol!(UnboundLinSymbol, LinSymbol, Linear);
unbound_symbol!(UnboundParamSymbol, ParamSymbol, Constant);
