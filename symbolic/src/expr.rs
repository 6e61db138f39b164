use crate::object::{ScalarLit, SymbolicObject};
use crate::sealed::SealedDegree;

/// A symbolic expression.
pub trait Expr: SymbolicObject {
    /// The highest algebraic power among the unknowns in this expression.
    ///
    /// # Degree Rules
    ///
    /// Degree 0:
    /// - [`ParamExpr`]s, which includes parameter symbols and literals.
    ///
    /// Degree 1:
    /// - [`LinExpr`]s, which includes linear symbols.
    fn degree(&self) -> u32;
}

/// A type-level degree.
///
/// Expressions whose degree is fixed name their class through [`FixedDegree::Class`]; the
/// degree they report is read off the class, never stored or computed per instance.
pub trait DegreeClass: SealedDegree + 'static {
    const DEGREE: u32;
}

/// Degree 0: constants and parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Constant {}

/// Degree 1: unknowns appearing linearly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Linear {}

impl SealedDegree for Constant {}
impl SealedDegree for Linear {}

impl DegreeClass for Constant {
    const DEGREE: u32 = 0;
}

impl DegreeClass for Linear {
    const DEGREE: u32 = 1;
}

/// A symbolic object whose degree is a property of its type.
///
/// Every implementer gets its [`Expr`] implementation from the blanket impl below, so
/// the degree it reports is always `Self::Class::DEGREE`.
pub trait FixedDegree: SymbolicObject {
    type Class: DegreeClass;
}

impl<T: FixedDegree> Expr for T {
    #[inline]
    fn degree(&self) -> u32 {
        T::Class::DEGREE
    }
}

/// A linear expression, that is, having degree 1.
pub trait LinExpr: Expr + FixedDegree<Class = Linear> {}

impl<T: Expr + FixedDegree<Class = Linear>> LinExpr for T {}

/// A parameter expression, that is, having degree 0.
pub trait ParamExpr: Expr + FixedDegree<Class = Constant> {}

impl<T: Expr + FixedDegree<Class = Constant>> ParamExpr for T {}

/// A literal expression, that is, containing just a literal numeric.
pub trait LitExpr: ParamExpr {
    fn value(&self) -> ScalarLit;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{unbound_lin_symbol, unbound_param_symbol};

    fn require_linear<E: LinExpr + ?Sized>(expr: &E) -> u32 {
        expr.degree()
    }

    fn require_param<E: ParamExpr + ?Sized>(expr: &E) -> u32 {
        expr.degree()
    }

    #[test]
    fn test_degree_classes() {
        assert_eq!(Constant::DEGREE, 0);
        assert_eq!(Linear::DEGREE, 1);
    }

    #[test]
    fn test_degree_bounds_accept_matching_symbols() {
        let x = unbound_lin_symbol("x").unwrap();
        let c = unbound_param_symbol("c").unwrap();

        assert_eq!(require_linear(&*x), 1);
        assert_eq!(require_param(&*c), 0);
    }

    #[test]
    fn test_degree_sum() {
        let x = unbound_lin_symbol("x").unwrap();
        let y = unbound_lin_symbol("y").unwrap();
        let c = unbound_param_symbol("c").unwrap();

        // 1 + 1 + 0.
        assert_eq!(x.degree() + y.degree() + c.degree(), 2);
    }
}
