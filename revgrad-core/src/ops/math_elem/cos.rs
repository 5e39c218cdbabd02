use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_unary, expect_arity};
use crate::value::{self, Value};

/// Element-wise cosine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cos;

impl Function for Cos {
    fn name(&self) -> &'static str {
        "Cos"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Cos::forward", xs, 1)?;
        Ok(vec![xs[0].mapv(f64::cos)])
    }

    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Cos::backward", xs, 1)?;
        expect_arity("Cos::backward", gys, 1)?;
        let gx = value::zip_with(&gys[0], &xs[0], "cos_backward", |g, x| -x.sin() * g)?;
        Ok(vec![gx])
    }
}

pub fn cos(x: impl IntoNode) -> Result<Node, RevgradError> {
    apply_unary(Cos, x)
}

#[cfg(test)]
#[path = "cos_test.rs"]
mod tests;
