use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_binary, expect_arity};
use crate::value::{self, Value};

/// Element-wise addition: `y = x0 + x1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl Function for Add {
    fn name(&self) -> &'static str {
        "Add"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Add::forward", xs, 2)?;
        Ok(vec![value::zip_with(&xs[0], &xs[1], "add", |a, b| a + b)?])
    }

    /// `dy/dx0 = dy/dx1 = 1`, so the upstream gradient passes through to both.
    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Add::backward", xs, 2)?;
        expect_arity("Add::backward", gys, 1)?;
        Ok(vec![gys[0].clone(), gys[0].clone()])
    }
}

/// Adds two nodes (or values coercible to nodes) element-wise.
pub fn add(a: impl IntoNode, b: impl IntoNode) -> Result<Node, RevgradError> {
    apply_binary(Add, a, b)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
