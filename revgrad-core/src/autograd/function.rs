use crate::error::RevgradError;
use crate::value::Value;
use std::fmt::Debug;

/// Defines the forward and backward computation of a differentiable primitive.
///
/// A `Function` is stateless with respect to the graph: it never sees `Node`s,
/// only the numeric values extracted from them. Wiring inputs and outputs
/// into the graph is done by [`crate::ops::apply`], so new primitives plug in
/// without touching the backward scheduler.
///
/// The trait requires `Debug + Send + Sync` because the recorded
/// [`Operation`](super::Operation) owning the function sits behind an `Arc`
/// shared by every output node.
pub trait Function: Debug + Send + Sync {
    /// Name used in diagnostics and error messages.
    fn name(&self) -> &'static str;

    /// Computes the output values from the input values.
    ///
    /// Must be pure: it reads nothing but `xs`. Multiple outputs are returned
    /// in order.
    fn forward(&self, xs: &[Value]) -> Result<Vec<Value>, RevgradError>;

    /// Computes one gradient per input from one gradient per output.
    ///
    /// # Arguments
    /// * `xs`: The values of the inputs, in the order they were applied.
    /// * `gys`: The gradient flowing into each output, in output order.
    ///
    /// # Returns
    /// A `Vec` holding the gradient for each input. Its order **must** match
    /// `xs`.
    fn backward(&self, xs: &[Value], gys: &[Value]) -> Result<Vec<Value>, RevgradError>;
}
