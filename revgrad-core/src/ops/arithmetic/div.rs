use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_binary, expect_arity};
use crate::value::{self, Value};

/// Element-wise division: `y = x0 / x1`.
///
/// Division by zero follows IEEE-754 (`inf` or `NaN`), it is not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Div;

impl Function for Div {
    fn name(&self) -> &'static str {
        "Div"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Div::forward", xs, 2)?;
        Ok(vec![value::zip_with(&xs[0], &xs[1], "div", |a, b| a / b)?])
    }

    /// grad_x0 = gy / x1, grad_x1 = -gy * x0 / x1^2
    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Div::backward", xs, 2)?;
        expect_arity("Div::backward", gys, 1)?;
        let (x0, x1) = (&xs[0], &xs[1]);
        let gy = &gys[0];
        let gx0 = value::zip_with(gy, x1, "div_backward", |g, b| g / b)?;
        let x0_over_x1_sq = value::zip_with(x0, x1, "div_backward", |a, b| a / (b * b))?;
        let gx1 = value::zip_with(gy, &x0_over_x1_sq, "div_backward", |g, q| -g * q)?;
        Ok(vec![gx0, gx1])
    }
}

pub fn div(a: impl IntoNode, b: impl IntoNode) -> Result<Node, RevgradError> {
    apply_binary(Div, a, b)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
