use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_binary, expect_arity};
use crate::value::{self, Value};

/// Element-wise multiplication: `y = x0 * x1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mul;

impl Function for Mul {
    fn name(&self) -> &'static str {
        "Mul"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Mul::forward", xs, 2)?;
        Ok(vec![value::zip_with(&xs[0], &xs[1], "mul", |a, b| a * b)?])
    }

    /// grad_x0 = gy * x1, grad_x1 = gy * x0
    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Mul::backward", xs, 2)?;
        expect_arity("Mul::backward", gys, 1)?;
        let gy = &gys[0];
        let gx0 = value::zip_with(gy, &xs[1], "mul_backward", |g, x1| g * x1)?;
        let gx1 = value::zip_with(gy, &xs[0], "mul_backward", |g, x0| g * x0)?;
        Ok(vec![gx0, gx1])
    }
}

/// Multiplies two nodes (or values coercible to nodes) element-wise.
pub fn mul(a: impl IntoNode, b: impl IntoNode) -> Result<Node, RevgradError> {
    apply_binary(Mul, a, b)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
