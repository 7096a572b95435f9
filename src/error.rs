use thiserror::Error;

use crate::expr::BinOp;

/// Reasons an evaluation can fail. Any of these aborts the whole
/// evaluation; no partial result is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{}`", .op.symbol())]
    Overflow { op: BinOp },

    #[error("unbound variable `{0}`")]
    UnboundVariable(String),
}

impl EvalError {
    /// Division by zero and overflow are arithmetic failures, as opposed to
    /// a missing binding in the environment.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            EvalError::Overflow { op: BinOp::Multiply }.to_string(),
            "integer overflow in `*`"
        );
        assert_eq!(
            EvalError::UnboundVariable("q".to_string()).to_string(),
            "unbound variable `q`"
        );
    }

    #[test]
    fn classification() {
        assert!(EvalError::DivisionByZero.is_arithmetic());
        assert!(EvalError::Overflow { op: BinOp::Add }.is_arithmetic());
        assert!(!EvalError::UnboundVariable("q".to_string()).is_arithmetic());
    }
}
