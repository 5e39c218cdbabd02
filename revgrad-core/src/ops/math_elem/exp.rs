use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_unary, expect_arity};
use crate::value::{self, Value};

/// Element-wise natural exponential: `y = e^x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl Function for Exp {
    fn name(&self) -> &'static str {
        "Exp"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Exp::forward", xs, 1)?;
        Ok(vec![xs[0].mapv(f64::exp)])
    }

    /// grad_x = e^x * gy, recomputed from the stored input.
    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Exp::backward", xs, 1)?;
        expect_arity("Exp::backward", gys, 1)?;
        let gx = value::zip_with(&gys[0], &xs[0], "exp_backward", |g, x| x.exp() * g)?;
        Ok(vec![gx])
    }
}

pub fn exp(x: impl IntoNode) -> Result<Node, RevgradError> {
    apply_unary(Exp, x)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
