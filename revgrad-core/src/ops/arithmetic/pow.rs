use crate::autograd::Function;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::ops::{apply_unary, expect_arity};
use crate::value::{self, Value};

/// Element-wise power with a constant exponent: `y = x^c`.
#[derive(Debug, Clone, Copy)]
pub struct Pow {
    pub exponent: f64,
}

impl Pow {
    pub fn new(exponent: f64) -> Self {
        Pow { exponent }
    }
}

impl Function for Pow {
    fn name(&self) -> &'static str {
        "Pow"
    }

    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Pow::forward", xs, 1)?;
        let c = self.exponent;
        Ok(vec![xs[0].mapv(|x| x.powf(c))])
    }

    /// grad_x = c * x^(c-1) * gy
    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError> {
        expect_arity("Pow::backward", xs, 1)?;
        expect_arity("Pow::backward", gys, 1)?;
        let c = self.exponent;
        let gx = value::zip_with(&gys[0], &xs[0], "pow_backward", |g, x| c * x.powf(c - 1.0) * g)?;
        Ok(vec![gx])
    }
}

/// Raises every element of `x` to the constant power `exponent`.
pub fn pow(x: impl IntoNode, exponent: f64) -> Result<Node, RevgradError> {
    apply_unary(Pow::new(exponent), x)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
