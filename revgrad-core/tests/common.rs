use revgrad_core::{Node, RevgradError};

/// Reads the single element of a scalar node's value.
#[allow(dead_code)]
pub fn scalar_value(node: &Node) -> Result<f64, RevgradError> {
    Ok(node.require_value()?[[]])
}

/// Reads the single element of a scalar node's gradient.
#[allow(dead_code)]
pub fn scalar_grad(node: &Node) -> f64 {
    node.grad().expect("gradient should be populated")[[]]
}

/// 100 * (x1 - x0^2)^2 + (x0 - 1)^2
#[allow(dead_code)]
pub fn rosenbrock(x0: &Node, x1: &Node) -> Result<Node, RevgradError> {
    let inner = (x1 - &x0.pow_of(2.0)?)?;
    let a = (100.0 * &inner.pow_of(2.0)?)?;
    let b = (x0 - 1.0)?.pow_of(2.0)?;
    &a + &b
}

/// Goldstein-Price function.
#[allow(dead_code)]
pub fn goldstein(x: &Node, y: &Node) -> Result<Node, RevgradError> {
    let s = ((x + y)? + 1.0)?.pow_of(2.0)?;
    let t1 = (19.0 - &(14.0 * x)?)?;
    let t2 = (&t1 + &(3.0 * &x.pow_of(2.0)?)?)?;
    let t3 = (&t2 - &(14.0 * y)?)?;
    let t4 = (&t3 + &(&(6.0 * x)? * y)?)?;
    let t5 = (&t4 + &(3.0 * &y.pow_of(2.0)?)?)?;
    let left = (1.0 + &(&s * &t5)?)?;

    let u = (&(2.0 * x)? - &(3.0 * y)?)?.pow_of(2.0)?;
    let v1 = (18.0 - &(32.0 * x)?)?;
    let v2 = (&v1 + &(12.0 * &x.pow_of(2.0)?)?)?;
    let v3 = (&v2 + &(12.0 * y)?)?;
    let v4 = (&v3 - &(&(36.0 * x)? * y)?)?;
    let v5 = (&v4 + &(27.0 * &y.pow_of(2.0)?)?)?;
    let right = (30.0 + &(&u * &v5)?)?;

    &left * &right
}

/// Method-call spelling of `ops::pow` for readable formulas.
#[allow(dead_code)]
pub trait PowOf {
    fn pow_of(&self, exponent: f64) -> Result<Node, RevgradError>;
}

impl PowOf for Node {
    fn pow_of(&self, exponent: f64) -> Result<Node, RevgradError> {
        revgrad_core::ops::pow(self, exponent)
    }
}
