use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_unary, expect_arity};
use crate::value::Value;

/// Element-wise negation: `y = -x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neg;

impl Function for Neg {
    fn name(&self) -> &'static str {
        "Neg"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Neg::forward", xs, 1)?;
        Ok(vec![xs[0].mapv(|x| -x)])
    }

    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Neg::backward", xs, 1)?;
        expect_arity("Neg::backward", gys, 1)?;
        Ok(vec![gys[0].mapv(|g| -g)])
    }
}

pub fn neg(x: impl IntoNode) -> Result<Node, RevgradError> {
    apply_unary(Neg, x)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
