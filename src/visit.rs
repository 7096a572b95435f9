use std::collections::BTreeSet;

use crate::expr::{BinOp, Expr, Value};

/// Dispatch over the cases of an [`Expr`].
///
/// A visitor gets the children of a binary node unevaluated and decides
/// itself whether and in which order to descend, so that it can stop early.
pub trait Visitor<'a> {
    type Output;

    fn visit_constant(&self, value: Value) -> Self::Output;
    fn visit_variable(&self, name: &'a str) -> Self::Output;
    fn visit_binary(&self, op: BinOp, left: &'a Expr, right: &'a Expr) -> Self::Output;
}

impl Expr {
    pub fn accept<'a, V: Visitor<'a>>(&'a self, visitor: &V) -> V::Output {
        match self {
            Expr::Constant(v) => visitor.visit_constant(*v),
            Expr::Variable(n) => visitor.visit_variable(n),
            Expr::Binary(op, l, r) => visitor.visit_binary(*op, l, r),
        }
    }
}

/// Collects the variable names referenced by a tree.
pub struct FreeVariables;

impl<'a> Visitor<'a> for FreeVariables {
    type Output = BTreeSet<&'a str>;

    fn visit_constant(&self, _value: Value) -> Self::Output {
        BTreeSet::new()
    }

    fn visit_variable(&self, name: &'a str) -> Self::Output {
        BTreeSet::from([name])
    }

    fn visit_binary(&self, _op: BinOp, left: &'a Expr, right: &'a Expr) -> Self::Output {
        let mut vars = left.accept(self);
        vars.extend(right.accept(self));
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_variables() {
        let e = Expr::div(
            Expr::mul(
                Expr::add(Expr::variable("z"), Expr::constant(7)),
                Expr::add(Expr::variable("y"), Expr::constant(3)),
            ),
            Expr::sub(
                Expr::mul(Expr::constant(5), Expr::variable("x")),
                Expr::variable("x"),
            ),
        );
        let vars: Vec<_> = e.free_variables().into_iter().collect();
        assert_eq!(vars, vec!["x", "y", "z"]);
        assert!(Expr::constant(1).free_variables().is_empty());
    }
}
