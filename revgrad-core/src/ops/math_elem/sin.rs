use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_unary, expect_arity};
use crate::value::{self, Value};

/// Element-wise sine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sin;

impl Function for Sin {
    fn name(&self) -> &'static str {
        "Sin"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Sin::forward", xs, 1)?;
        Ok(vec![xs[0].mapv(f64::sin)])
    }

    /// grad_x = cos(x) * gy
    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Sin::backward", xs, 1)?;
        expect_arity("Sin::backward", gys, 1)?;
        let gx = value::zip_with(&gys[0], &xs[0], "sin_backward", |g, x| x.cos() * g)?;
        Ok(vec![gx])
    }
}

pub fn sin(x: impl IntoNode) -> Result<Node, RevgradError> {
    apply_unary(Sin, x)
}

#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;
