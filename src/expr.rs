use std::collections::BTreeSet;
use std::fmt;

use crate::error::EvalError;
use crate::visit::FreeVariables;

pub type Value = i64;
pub type Name = String;

/////
///// Operators
/////

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Multiply,
    Subtract,
    Divide,
}

impl BinOp {
    /// Applies the operator to `l` and `r`, in that order.
    ///
    /// Division truncates toward zero. Results that do not fit in a
    /// [`Value`] are reported as [`EvalError::Overflow`] instead of wrapping.
    pub fn apply(self, l: Value, r: Value) -> Result<Value, EvalError> {
        let result = match self {
            BinOp::Add => l.checked_add(r),
            BinOp::Multiply => l.checked_mul(r),
            BinOp::Subtract => l.checked_sub(r),
            BinOp::Divide => {
                if r == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                l.checked_div(r)
            }
        };
        result.ok_or(EvalError::Overflow { op: self })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Multiply => "*",
            BinOp::Subtract => "-",
            BinOp::Divide => "/",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Subtract => 1,
            BinOp::Multiply | BinOp::Divide => 2,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/////
///// Expressions
/////

/// An arithmetic expression tree. Every binary node owns both of its
/// children, so cloning an `Expr` copies the whole tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Constant(Value),
    Variable(Name),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

pub use Expr::*;

impl Expr {
    pub fn constant(value: Value) -> Self {
        Constant(value)
    }

    pub fn variable(name: impl Into<Name>) -> Self {
        Variable(name.into())
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Binary(op, Box::new(left), Box::new(right))
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Add, left, right)
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Multiply, left, right)
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Subtract, left, right)
    }

    pub fn div(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Divide, left, right)
    }

    pub fn as_constant(&self) -> Option<Value> {
        match self {
            Constant(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Variable(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<(BinOp, &Expr, &Expr)> {
        match self {
            Binary(op, l, r) => Some((*op, l, r)),
            _ => None,
        }
    }

    /// Names of all variables referenced anywhere in the tree.
    pub fn free_variables(&self) -> BTreeSet<&str> {
        self.accept(&FreeVariables)
    }

    /// Length of the longest path from the root to a leaf, counting nodes.
    pub fn depth(&self) -> usize {
        match self {
            Constant(_) | Variable(_) => 1,
            Binary(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Total number of nodes.
    pub fn size(&self) -> usize {
        match self {
            Constant(_) | Variable(_) => 1,
            Binary(_, l, r) => 1 + l.size() + r.size(),
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parens: bool) -> fmt::Result {
        if parens {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

// Operators are left associative, so a right operand of equal precedence
// keeps its parentheses: `a - (b - c)` and `a * (b / c)` differ from the
// flat forms.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant(v) => write!(f, "{}", v),
            Variable(n) => f.write_str(n),
            Binary(op, l, r) => {
                let prec = op.precedence();
                let left_parens = match l.as_ref() {
                    Binary(lop, _, _) => lop.precedence() < prec,
                    Constant(v) => *v < 0,
                    Variable(_) => false,
                };
                let right_parens = match r.as_ref() {
                    Binary(rop, _, _) => rop.precedence() <= prec,
                    Constant(v) => *v < 0,
                    Variable(_) => false,
                };
                l.fmt_operand(f, left_parens)?;
                write!(f, " {} ", op)?;
                r.fmt_operand(f, right_parens)
            }
        }
    }
}
