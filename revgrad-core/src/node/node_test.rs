use super::*;
use crate::ops::{add, square};
use crate::utils::testing::check_value_near;
use approx::assert_relative_eq;

#[test]
fn test_new_leaf_defaults() {
    let x = Node::new(value::scalar(1.5));
    assert!(x.is_leaf());
    assert_eq!(x.generation(), 0);
    assert!(x.grad().is_none());
    assert!(x.producer().is_none());
    assert_eq!(x.shape(), Some(vec![]));
    assert_eq!(x.numel(), 1);
}

#[test]
fn test_empty_node() {
    let x = Node::empty();
    assert!(x.value().is_none());
    assert_eq!(x.shape(), None);
    assert_eq!(x.numel(), 0);
    assert!(matches!(
        x.require_value(),
        Err(RevgradError::InvalidValueType(_))
    ));
}

#[test]
fn test_from_shape_vec_invalid_buffer() {
    let result = Node::from_shape_vec(vec![3], vec![1.0, 2.0]);
    assert!(matches!(result, Err(RevgradError::InvalidValueType(_))));
}

#[test]
fn test_set_producer_stamps_generation() -> Result<(), RevgradError> {
    let x = Node::from(2.0);
    let a = square(&x)?;
    let b = square(&a)?;
    assert_eq!(a.generation(), 1);
    assert_eq!(b.generation(), 2);
    let op = b.producer().expect("b should have a producer");
    assert_eq!(op.generation(), 1);
    assert_eq!(op.name(), "Square");
    assert!(op.inputs()[0].ptr_eq(&a));
    Ok(())
}

#[test]
fn test_accumulate_gradient_sums_without_aliasing() -> Result<(), RevgradError> {
    let x = Node::from_shape_vec(vec![2], vec![0.0, 0.0])?;
    let first = value::from_shape_vec(vec![2], vec![1.0, 2.0])?;
    let second = value::from_shape_vec(vec![2], vec![10.0, 20.0])?;

    x.accumulate_gradient(first.clone())?;
    x.accumulate_gradient(second.clone())?;

    check_value_near(&x.grad().unwrap(), &[2], &[11.0, 22.0], 1e-12);
    // The contributions themselves are left untouched
    check_value_near(&first, &[2], &[1.0, 2.0], 0.0);
    check_value_near(&second, &[2], &[10.0, 20.0], 0.0);
    Ok(())
}

#[test]
fn test_accumulate_gradient_shape_mismatch() -> Result<(), RevgradError> {
    let x = Node::from_shape_vec(vec![2], vec![0.0, 0.0])?;
    let result = x.accumulate_gradient(value::scalar(1.0));
    assert!(matches!(
        result,
        Err(RevgradError::ShapeMismatch { ref operation, .. }) if operation == "accumulate_gradient"
    ));
    assert!(x.grad().is_none());
    Ok(())
}

#[test]
fn test_accumulate_gradient_sums_into_scalar_node() -> Result<(), RevgradError> {
    let c = Node::from(3.0);
    c.accumulate_gradient(value::from_shape_vec(vec![3], vec![1.0, 2.0, 3.0])?)?;
    c.accumulate_gradient(value::from_shape_vec(vec![2], vec![0.5, 0.5])?)?;
    assert_eq!(c.grad().unwrap().ndim(), 0);
    assert_relative_eq!(c.grad().unwrap()[[]], 7.0);
    Ok(())
}

#[test]
fn test_clear_gradient() -> Result<(), RevgradError> {
    let x = Node::from(3.0);
    x.accumulate_gradient(value::scalar(1.0))?;
    assert!(x.grad().is_some());
    x.clear_gradient();
    assert!(x.grad().is_none());
    Ok(())
}

#[test]
fn test_leaf_compute_gradients_seeds_ones() -> Result<(), RevgradError> {
    let x = Node::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0])?;
    x.compute_gradients(false)?;
    check_value_near(&x.grad().unwrap(), &[2, 2], &[1.0; 4], 0.0);
    Ok(())
}

#[test]
fn test_compute_gradients_on_empty_node_fails() {
    let x = Node::empty();
    assert!(matches!(
        x.backward(),
        Err(RevgradError::InvalidValueType(_))
    ));
}

#[test]
fn test_existing_gradient_is_used_as_seed() -> Result<(), RevgradError> {
    let x = Node::from(3.0);
    let y = square(&x)?;
    y.accumulate_gradient(value::scalar(0.5))?;
    y.backward()?;
    // 2 * x * 0.5
    assert_relative_eq!(x.grad().unwrap()[[]], 3.0);
    Ok(())
}

#[test]
fn test_detach_drops_history() -> Result<(), RevgradError> {
    let x = Node::from(2.0);
    let y = add(&x, 1.0)?;
    let d = y.detach();
    assert!(d.is_leaf());
    assert_eq!(d.generation(), 0);
    assert_relative_eq!(d.require_value()?[[]], 3.0);
    assert!(!d.ptr_eq(&y));
    Ok(())
}

#[test]
fn test_set_value_keeps_node_identity() -> Result<(), RevgradError> {
    let x = Node::from(1.0);
    let handle = x.clone();
    x.set_value(value::scalar(5.0))?;
    assert_relative_eq!(handle.require_value()?[[]], 5.0);
    assert!(handle.ptr_eq(&x));
    Ok(())
}

#[test]
fn test_set_value_rejects_non_leaf() -> Result<(), RevgradError> {
    let x = Node::from(3.0);
    let y = square(&x)?;
    let result = y.set_value(value::scalar(1.0));
    assert!(matches!(
        result,
        Err(RevgradError::InplaceModificationError { ref operation, .. }) if operation == "set_value"
    ));
    // The rejected update leaves the node and its history untouched
    assert_relative_eq!(y.require_value()?[[]], 9.0);
    y.backward()?;
    assert_relative_eq!(x.grad().unwrap()[[]], 6.0);
    Ok(())
}

#[test]
fn test_set_value_rejects_shape_change() -> Result<(), RevgradError> {
    let x = Node::from_shape_vec(vec![2], vec![1.0, 2.0])?;
    let result = x.set_value(value::scalar(1.0));
    assert!(matches!(result, Err(RevgradError::ShapeMismatch { .. })));
    assert_eq!(x.shape(), Some(vec![2]));

    let empty = Node::empty();
    empty.set_value(value::scalar(4.0))?;
    assert_relative_eq!(empty.require_value()?[[]], 4.0);
    Ok(())
}

#[test]
fn test_name_and_display() -> Result<(), RevgradError> {
    let x = Node::from(2.0);
    assert_eq!(x.name(), None);
    x.set_name("x");
    assert_eq!(x.name().as_deref(), Some("x"));
    assert_eq!(x.to_string(), "variable(2)");
    assert_eq!(Node::empty().to_string(), "variable(None)");

    let debug = format!("{:?}", square(&x)?);
    assert!(debug.contains("generation=1"));
    assert!(debug.contains("producer=Square"));
    Ok(())
}

#[test]
fn test_into_node_coercions() -> Result<(), RevgradError> {
    let x = Node::from(1.0);
    assert!(x.clone().into_node()?.ptr_eq(&x));
    assert!((&x).into_node()?.ptr_eq(&x));
    assert_relative_eq!(3_i32.into_node()?.require_value()?[[]], 3.0);
    assert_relative_eq!(2.5_f32.into_node()?.require_value()?[[]], 2.5);
    let v = value::from_shape_vec(vec![2], vec![1.0, 2.0])?;
    assert_eq!(v.into_node()?.shape(), Some(vec![2]));
    Ok(())
}
