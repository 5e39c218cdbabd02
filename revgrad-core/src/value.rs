//! # Numeric values
//!
//! Node payloads and gradients are dynamic-rank `f64` arrays from `ndarray`.
//! This module holds the few constructors and element-wise helpers the engine
//! needs on top of them: scalar coercion, `ones_like`, a fallible binary zip
//! that reports incompatible shapes instead of panicking, and the matching
//! gradient reduction.

use crate::error::RevgradError;
use ndarray::{arr0, ArrayD, IxDyn, Zip};
use num_traits::ToPrimitive;

/// The numeric container carried by every `Node`.
pub type Value = ArrayD<f64>;

/// Builds a 0-dimensional array holding `x`.
pub fn scalar(x: f64) -> Value {
    arr0(x).into_dyn()
}

/// Coerces any primitive number into a 0-dimensional array.
///
/// # Errors
/// Returns `RevgradError::InvalidValueType` if `x` has no `f64` representation.
pub fn from_scalar<T: ToPrimitive>(x: T) -> Result<Value, RevgradError> {
    x.to_f64().map(scalar).ok_or_else(|| {
        RevgradError::InvalidValueType(format!(
            "{} cannot be represented as f64",
            std::any::type_name::<T>()
        ))
    })
}

/// Builds an array of the given shape from a flat, row-major buffer.
///
/// # Errors
/// Returns `RevgradError::InvalidValueType` if `data.len()` does not match the
/// number of elements implied by `shape`.
pub fn from_shape_vec(shape: Vec<usize>, data: Vec<f64>) -> Result<Value, RevgradError> {
    let data_len = data.len();
    ArrayD::from_shape_vec(IxDyn(&shape), data).map_err(|e| {
        RevgradError::InvalidValueType(format!(
            "buffer of length {} cannot form shape {:?}: {}",
            data_len, shape, e
        ))
    })
}

/// An array of ones with the same shape as `v`.
pub fn ones_like(v: &Value) -> Value {
    ArrayD::ones(v.raw_dim())
}

/// Applies `f` element-wise over `a` and `b`.
///
/// Equal shapes are zipped directly. A 0-dimensional operand is broadcast to
/// the other operand's shape. No other broadcasting is performed, so every
/// gradient can be brought back to its node's shape by [`sum_to_shape`].
///
/// # Errors
/// Returns `RevgradError::ShapeMismatch` when the shapes differ and neither
/// operand is 0-dimensional.
pub fn zip_with<F>(a: &Value, b: &Value, operation: &str, f: F) -> Result<Value, RevgradError>
where
    F: Fn(f64, f64) -> f64,
{
    if a.shape() == b.shape() {
        return Ok(Zip::from(a).and(b).map_collect(|&x, &y| f(x, y)));
    }
    if b.ndim() == 0 {
        let y = b[[]];
        return Ok(a.mapv(|x| f(x, y)));
    }
    if a.ndim() == 0 {
        let x = a[[]];
        return Ok(b.mapv(|y| f(x, y)));
    }
    Err(RevgradError::ShapeMismatch {
        expected: a.shape().to_vec(),
        actual: b.shape().to_vec(),
        operation: operation.to_string(),
    })
}

/// Reduces a gradient to `target_shape`.
///
/// A gradient already shaped like the target is returned unchanged. A
/// 0-dimensional target (a coerced constant that was broadcast in the forward
/// pass) receives the sum of all elements.
///
/// # Errors
/// Returns `RevgradError::ShapeMismatch` for any other pair of shapes.
pub fn sum_to_shape(grad: Value, target_shape: &[usize], operation: &str) -> Result<Value, RevgradError> {
    if grad.shape() == target_shape {
        return Ok(grad);
    }
    if target_shape.is_empty() {
        return Ok(scalar(grad.sum()));
    }
    Err(RevgradError::ShapeMismatch {
        expected: target_shape.to_vec(),
        actual: grad.shape().to_vec(),
        operation: operation.to_string(),
    })
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
