//! # Operations Module (`ops`)
//!
//! Differentiable primitives and the machinery that records them.
//!
//! ## Structure:
//!
//! - [`apply`]: runs a [`Function`]'s forward pass over input nodes and, while
//!   recording is enabled, wires the outputs into the graph.
//! - **Function structs:** each primitive (`Add`, `Square`, ...) is a small
//!   struct implementing [`Function`]; new primitives only need such a struct.
//! - **Free functions:** `add`, `mul`, `square`, `exp`, `sin`, ... coerce their
//!   arguments through [`IntoNode`] and return the single output node.
//! - `overload`: `+ - * /` and unary `-` on `&Node` and `f64`.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: square, exp, sin, cos.

use crate::autograd::{Function, Operation};
use crate::config;
use crate::error::RevgradError;
use crate::node::{IntoNode, Node};
use crate::value::Value;

pub mod arithmetic;
pub mod math_elem;
mod overload;

pub use arithmetic::{add, div, mul, neg, pow, sub, Add, Div, Mul, Neg, Pow, Sub};
pub use math_elem::{cos, exp, sin, square, Cos, Exp, Sin, Square};

/// The nodes produced by one [`apply`] call.
///
/// Most primitives produce a single output; callers that may receive several
/// branch on the variant or use [`Applied::into_vec`].
#[derive(Debug, Clone)]
pub enum Applied {
    One(Node),
    Many(Vec<Node>),
}

impl Applied {
    fn from_outputs(mut outputs: Vec<Node>) -> Self {
        if outputs.len() == 1 {
            Applied::One(outputs.remove(0))
        } else {
            Applied::Many(outputs)
        }
    }

    /// Returns the single output node.
    ///
    /// # Errors
    /// Returns `RevgradError::ArityMismatch` if several outputs were produced.
    pub fn into_single(self) -> Result<Node, RevgradError> {
        match self {
            Applied::One(node) => Ok(node),
            Applied::Many(nodes) => Err(RevgradError::ArityMismatch {
                operation: "Applied::into_single".to_string(),
                expected: 1,
                actual: nodes.len(),
            }),
        }
    }

    /// Returns all output nodes in order.
    pub fn into_vec(self) -> Vec<Node> {
        match self {
            Applied::One(node) => vec![node],
            Applied::Many(nodes) => nodes,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Applied::One(_) => 1,
            Applied::Many(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Applies `function` to `inputs`.
///
/// 1. Extracts the input values and runs `function.forward`.
/// 2. Wraps each output value in a new node.
/// 3. If recording is enabled, records an [`Operation`] owning `function` and
///    `inputs`, and links every output to it (bumping their generation).
///
/// Nothing is recorded when an error is returned, so a failed call leaves the
/// graph as it was.
///
/// # Errors
/// * `RevgradError::InvalidValueType` if an input is an empty node.
/// * Whatever `function.forward` returns, unchanged.
/// * `RevgradError::ArityMismatch` if `forward` produced no output.
pub fn apply<F>(function: F, inputs: Vec<Node>) -> Result<Applied, RevgradError>
where
    F: Function + 'static,
{
    let xs = inputs
        .iter()
        .map(Node::require_value)
        .collect::<Result<Vec<Value>, RevgradError>>()?;

    let ys = function.forward(&xs)?;
    if ys.is_empty() {
        return Err(RevgradError::ArityMismatch {
            operation: format!("{}::forward", function.name()),
            expected: 1,
            actual: 0,
        });
    }

    let outputs: Vec<Node> = ys.into_iter().map(Node::new).collect();

    if config::is_recording_enabled() {
        let op = Operation::new(Box::new(function), inputs, &outputs);
        for output in &outputs {
            output.set_producer(&op);
        }
        log::trace!("recorded {:?}", op);
    }

    Ok(Applied::from_outputs(outputs))
}

/// Applies a one-input, one-output function to a coerced argument.
pub(crate) fn apply_unary<F>(function: F, x: impl IntoNode) -> Result<Node, RevgradError>
where
    F: Function + 'static,
{
    apply(function, vec![x.into_node()?])?.into_single()
}

/// Applies a two-input, one-output function to coerced arguments.
pub(crate) fn apply_binary<F>(
    function: F,
    a: impl IntoNode,
    b: impl IntoNode,
) -> Result<Node, RevgradError>
where
    F: Function + 'static,
{
    apply(function, vec![a.into_node()?, b.into_node()?])?.into_single()
}

/// Checks that a `forward`/`backward` argument list has the expected length.
pub(crate) fn expect_arity(
    operation: &str,
    values: &[Value],
    expected: usize,
) -> Result<(), RevgradError> {
    if values.len() != expected {
        return Err(RevgradError::ArityMismatch {
            operation: operation.to_string(),
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
