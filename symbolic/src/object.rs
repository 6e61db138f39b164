use core::fmt::{self, Debug, Display};

use alloc::format;
use alloc::string::{String, ToString};

use crate::error::SymbolicTypeError;
use crate::sealed::{Sealed, Variant};

/// The root capability shared by every symbolic object.
///
/// Implementers are immutable value objects: once constructed, nothing about them changes,
/// so holding a reference is the same as holding a copy. A new value is produced by building
/// a new object.
///
/// Two renderings are required:
/// - `Debug` follows `<VariantName>(<full description>)` and is meant for diagnostics.
/// - `Display` is the prettier form, without the variant name.
///
/// Symbolic objects do not implement `PartialEq`; `==` is reserved for structural comparison
/// of compound expressions. Use [`identical_to`](Self::identical_to) to ask whether two
/// objects are the same value.
pub trait SymbolicObject: Sealed + Debug + Display + Send + Sync {
    /// Returns `true` if `other` is the same concrete variant carrying the same defining data.
    ///
    /// Never fails: a different variant or a scalar literal simply compares as `false`.
    fn identical_to(&self, other: Operand<'_>) -> bool {
        other.variant().is_some_and(|variant| variant == self.variant())
    }

    /// The `Debug` rendering, `<VariantName>(<full description>)`.
    fn repr(&self) -> String {
        format!("{:?}", self)
    }

    /// The `Display` rendering.
    fn pretty(&self) -> String {
        self.to_string()
    }
}

/// A bare numeric literal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScalarLit {
    Int(i64),
    Float(f64),
}

impl ScalarLit {
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
        }
    }
}

impl Display for ScalarLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => Display::fmt(value, f),
            Self::Float(value) => Display::fmt(value, f),
        }
    }
}

impl From<i64> for ScalarLit {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ScalarLit {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for ScalarLit {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The right-hand side of a symbolic comparison: either a symbolic object or a scalar literal.
///
/// Built with `From`, e.g. `Operand::from(&*symbol)` or `Operand::from(3)`.
#[derive(Copy, Clone, Debug)]
pub struct Operand<'a>(OperandKind<'a>);

#[derive(Copy, Clone, Debug)]
enum OperandKind<'a> {
    Symbolic(Variant<'a>),
    Scalar(ScalarLit),
}

impl<'a> Operand<'a> {
    pub(crate) const fn variant(self) -> Option<Variant<'a>> {
        match self.0 {
            OperandKind::Symbolic(variant) => Some(variant),
            OperandKind::Scalar(_) => None,
        }
    }

    pub const fn is_scalar(self) -> bool {
        matches!(self.0, OperandKind::Scalar(_))
    }

    pub const fn as_scalar(self) -> Option<ScalarLit> {
        match self.0 {
            OperandKind::Scalar(scalar) => Some(scalar),
            OperandKind::Symbolic(_) => None,
        }
    }

    /// The scalar literal this operand holds, or a [`SymbolicTypeError`] if it is a symbolic
    /// object instead.
    pub fn into_scalar(self) -> Result<ScalarLit, SymbolicTypeError> {
        self.as_scalar()
            .ok_or_else(|| SymbolicTypeError::unexpected("scalar literal", self))
    }

    /// Name of the operand's kind: the variant name for symbolic objects, `int` or `float`
    /// for scalars.
    pub const fn type_name(self) -> &'static str {
        match self.0 {
            OperandKind::Symbolic(variant) => variant.type_name(),
            OperandKind::Scalar(scalar) => scalar.type_name(),
        }
    }
}

impl<'a, T: SymbolicObject + ?Sized> From<&'a T> for Operand<'a> {
    fn from(value: &'a T) -> Self {
        Self(OperandKind::Symbolic(value.variant()))
    }
}

impl From<ScalarLit> for Operand<'_> {
    fn from(value: ScalarLit) -> Self {
        Self(OperandKind::Scalar(value))
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        ScalarLit::from(value).into()
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        ScalarLit::from(value).into()
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        ScalarLit::from(value).into()
    }
}
