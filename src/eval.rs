use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::error::EvalError;
use crate::expr::{BinOp, Expr, Name, Value};
use crate::visit::Visitor;

/////
///// Environment
/////

/// Variable bindings for an evaluation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Env {
    bindings: HashMap<Name, Value>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<N: Into<Name>> FromIterator<(N, Value)> for Env {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        Env {
            bindings: iter.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }
}

impl<N: Into<Name>, const K: usize> From<[(N, Value); K]> for Env {
    fn from(pairs: [(N, Value); K]) -> Self {
        pairs.into_iter().collect()
    }
}

/////
///// An evaluator with eval.
/////

/// Reduces expressions to integers under a fixed environment.
///
/// The evaluator never mutates the trees it is given, and one instance can
/// evaluate any number of them.
///
/// Evaluation recurses once per tree level, so the depth it can handle is
/// bounded by the calling thread's stack (tens of thousands of levels on a
/// default 2 MiB thread stack).
#[derive(Clone, Debug)]
pub struct Evaluator {
    env: Env,
}

impl Evaluator {
    pub fn new(env: Env) -> Self {
        debug!(bindings = env.len(), "created evaluator");
        Evaluator { env }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn eval(&self, e: &Expr) -> Result<Value, EvalError> {
        e.accept(self).inspect_err(|err| warn!(expr = %e, "evaluation failed: {}", err))
    }
}

impl<'a> Visitor<'a> for Evaluator {
    type Output = Result<Value, EvalError>;

    fn visit_constant(&self, value: Value) -> Self::Output {
        trace!(value, "constant");
        Ok(value)
    }

    fn visit_variable(&self, name: &'a str) -> Self::Output {
        let value = self
            .env
            .get(name)
            .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))?;
        trace!(name, value, "variable");
        Ok(value)
    }

    fn visit_binary(&self, op: BinOp, left: &'a Expr, right: &'a Expr) -> Self::Output {
        let l = left.accept(self)?;
        let r = right.accept(self)?;
        let value = op.apply(l, r)?;
        trace!(%op, l, r, value, "binary");
        Ok(value)
    }
}
