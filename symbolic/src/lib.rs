//! Symbolic expression objects whose algebraic degree is part of their type.
//!
//! Everything here is an immutable value object reached through a capability trait:
//!
//! - [`SymbolicObject`]: identity comparison and the two string renderings.
//! - [`Expr`]: an expression with a [`degree`](Expr::degree).
//! - [`LinExpr`] / [`ParamExpr`] / [`LitExpr`]: expressions whose degree is fixed by
//!   their [`DegreeClass`].
//! - [`Symbol`]: a named atomic expression, with [`LinSymbol`] and [`ParamSymbol`] as the
//!   two concrete kinds.
//!
//! Symbols are only built through [`unbound_lin_symbol`] and [`unbound_param_symbol`].

#![no_std]

extern crate alloc;

mod error;
mod expr;
mod object;
mod symbol;

pub use error::*;
pub use expr::*;
pub use object::*;
pub use symbol::*;

/// Keeps the capability traits closed to this crate.
///
/// Every implementer also exposes a tagged [`Variant`](sealed::Variant) view of itself, which
/// is what identity comparison matches on.
mod sealed {
    pub trait Sealed {
        fn variant(&self) -> Variant<'_>;
    }

    pub trait SealedDegree {}

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum Variant<'a> {
        LinSymbol(&'a str),
        ParamSymbol(&'a str),
    }

    impl Variant<'_> {
        pub const fn type_name(self) -> &'static str {
            match self {
                Self::LinSymbol(_) => "LinSymbol",
                Self::ParamSymbol(_) => "ParamSymbol",
            }
        }
    }
}
