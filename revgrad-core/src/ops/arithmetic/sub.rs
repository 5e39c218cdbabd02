use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_binary, expect_arity};
use crate::value::{self, Value};

/// Element-wise subtraction: `y = x0 - x1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sub;

impl Function for Sub {
    fn name(&self) -> &'static str {
        "Sub"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Sub::forward", xs, 2)?;
        Ok(vec![value::zip_with(&xs[0], &xs[1], "sub", |a, b| a - b)?])
    }

    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Sub::backward", xs, 2)?;
        expect_arity("Sub::backward", gys, 1)?;
        let gy = &gys[0];
        Ok(vec![gy.clone(), gy.mapv(|g| -g)])
    }
}

pub fn sub(a: impl IntoNode, b: impl IntoNode) -> Result<Node, RevgradError> {
    apply_binary(Sub, a, b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
