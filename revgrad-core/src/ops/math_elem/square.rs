use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_unary, expect_arity};
use crate::value::{self, Value};

/// Element-wise square: `y = x^2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Function for Square {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Square::forward", xs, 1)?;
        Ok(vec![xs[0].mapv(|x| x * x)])
    }

    /// grad_x = 2 * x * gy
    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Square::backward", xs, 1)?;
        expect_arity("Square::backward", gys, 1)?;
        let gx = value::zip_with(&gys[0], &xs[0], "square_backward", |g, x| 2.0 * x * g)?;
        Ok(vec![gx])
    }
}

pub fn square(x: impl IntoNode) -> Result<Node, RevgradError> {
    apply_unary(Square, x)
}

#[cfg(test)]
#[path = "square_test.rs"]
mod tests;
