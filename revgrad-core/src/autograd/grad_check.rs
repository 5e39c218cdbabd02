use crate::config;
use crate::error::RevgradError;
use crate::node::Node;
use crate::value::{self, Value};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(RevgradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(RevgradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Gradient check input must be a leaf node with a value. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Error during intermediate calculation: {0}")]
    ValueError(RevgradError),
}

impl From<RevgradError> for GradCheckError {
    fn from(err: RevgradError) -> Self {
        GradCheckError::ValueError(err)
    }
}

/// Central-difference derivative of an element-wise function `f` at `x`.
///
/// Every element of `x` is shifted by `±eps` at once, so the result is the
/// element-wise derivative only when each output element depends on the
/// matching input element alone.
pub fn numerical_diff<F>(f: F, x: &Node, eps: f64) -> Result<Value, RevgradError>
where
    F: Fn(&Node) -> Result<Node, RevgradError>,
{
    let base = x.require_value()?;
    let (y_minus, y_plus) = config::no_grad(|| -> Result<(Value, Value), RevgradError> {
        let x_minus = Node::new(base.mapv(|v| v - eps));
        let x_plus = Node::new(base.mapv(|v| v + eps));
        Ok((f(&x_minus)?.require_value()?, f(&x_plus)?.require_value()?))
    })?;
    value::zip_with(&y_plus, &y_minus, "numerical_diff", |p, m| (p - m) / (2.0 * eps))
}

/// Sums every element of the function output; the scalar the checks compare.
fn evaluate_sum<F>(func: &F, inputs: &[Node]) -> Result<f64, GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, RevgradError>,
{
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.require_value()?.sum())
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// The analytic side seeds the output with ones, which makes it the gradient
/// of the sum of all output elements; the numeric side perturbs one input
/// element at a time and differentiates that same sum. Inputs the output does
/// not depend on are expected to have an all-zero numerical gradient.
///
/// # Arguments
/// * `func`: Builds the output node from the inputs.
/// * `inputs`: Leaf nodes to differentiate with respect to. Their gradients
///   are cleared first and hold the analytic result afterwards.
/// * `epsilon`: Finite-difference step.
/// * `tolerance`: Absolute and relative tolerance of the comparison.
pub fn check_grad<F>(
    func: F,
    inputs: &[Node],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, RevgradError>,
{
    for (input_index, input) in inputs.iter().enumerate() {
        if !input.is_leaf() || input.value().is_none() {
            return Err(GradCheckError::InputNotLeaf { input_index });
        }
        input.clear_gradient();
    }

    // --- Analytical gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    // --- Numerical gradients, one element at a time ---
    let _guard = config::with_recording_disabled();
    let originals = inputs
        .iter()
        .map(Node::require_value)
        .collect::<Result<Vec<Value>, RevgradError>>()?;

    for (input_index, input) in inputs.iter().enumerate() {
        let original = &originals[input_index];
        let analytical = input
            .grad()
            .unwrap_or_else(|| Value::zeros(original.raw_dim()));

        for (element_index, &analytical_grad) in analytical.iter().enumerate() {
            let perturbed_loss = |delta: f64| -> Result<f64, GradCheckError> {
                let mut shifted = original.clone();
                if let Some(x) = shifted.iter_mut().nth(element_index) {
                    *x += delta;
                }
                let perturbed: Vec<Node> = originals
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        if i == input_index {
                            Node::new(shifted.clone())
                        } else {
                            Node::new(v.clone())
                        }
                    })
                    .collect();
                evaluate_sum(&func, &perturbed)
            };

            let loss_plus = perturbed_loss(epsilon)?;
            let loss_minus = perturbed_loss(-epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }

            if !approx::relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
