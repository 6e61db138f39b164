//! Error types for building and combining symbolic objects.

use alloc::string::String;

use thiserror::Error;

use crate::object::Operand;

/// A symbol name contained a character outside [`VALID_NAME_CHARS`](crate::VALID_NAME_CHARS).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid symbol name {name:?}: {invalid:?} at byte {offset} is not an ASCII letter, digit or underscore"
)]
pub struct InvalidNameError {
    name: String,
    invalid: char,
    offset: usize,
}

impl InvalidNameError {
    pub(crate) fn new(name: impl Into<String>, invalid: char, offset: usize) -> Self {
        Self {
            name: name.into(),
            invalid,
            offset,
        }
    }

    /// The rejected name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The first character of the name that is not allowed.
    pub const fn invalid(&self) -> char {
        self.invalid
    }

    /// Byte offset of [`invalid`](Self::invalid) within the name.
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// A symbolic operation received a symbolic object of the wrong variant.
///
/// Handing over something that is neither a symbolic object nor a scalar is ruled out by the
/// [`Operand`] type, so this is the only type error operations report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct SymbolicTypeError {
    expected: &'static str,
    found: &'static str,
}

impl SymbolicTypeError {
    /// Records that `expected` was required but `found` was given.
    pub fn unexpected(expected: &'static str, found: Operand<'_>) -> Self {
        Self {
            expected,
            found: found.type_name(),
        }
    }

    pub const fn expected(&self) -> &'static str {
        self.expected
    }

    pub const fn found(&self) -> &'static str {
        self.found
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolicError {
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),
    #[error(transparent)]
    Type(#[from] SymbolicTypeError),
}

pub type SymbolicResult<T> = core::result::Result<T, SymbolicError>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{unbound_lin_symbol, unbound_param_symbol};

    #[test]
    fn test_invalid_name_message() {
        let err = unbound_lin_symbol("a b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid symbol name \"a b\": ' ' at byte 1 is not an ASCII letter, digit or underscore"
        );
    }

    #[test]
    fn test_type_error_message() {
        let x = unbound_lin_symbol("x").unwrap();
        let err = SymbolicTypeError::unexpected("ParamSymbol", Operand::from(&*x));
        assert_eq!(err.to_string(), "expected ParamSymbol, found LinSymbol");

        let err = SymbolicTypeError::unexpected("LinSymbol", Operand::from(1.0));
        assert_eq!(err.found(), "float");
    }

    #[test]
    fn test_question_mark_into_symbolic_error() {
        fn build(name: &str) -> SymbolicResult<u32> {
            let c = unbound_param_symbol(name)?;
            let scalar = Operand::from(&*c).into_scalar()?;
            Ok(scalar.type_name().len() as u32)
        }

        assert!(matches!(build("a-b"), Err(SymbolicError::InvalidName(_))));
        assert!(matches!(build("c"), Err(SymbolicError::Type(_))));
    }
}
