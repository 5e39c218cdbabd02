// src/node/mod.rs

use crate::error::RevgradError;
use crate::node_data::NodeData;
use crate::value::{self, Value};
use num_traits::ToPrimitive;
use std::sync::{Arc, RwLock, Weak};

mod autograd_methods;
mod traits;

pub use traits::IntoNode;

/// A value holder in the computation graph.
///
/// `Node` wraps `Arc<RwLock<NodeData>>`:
/// 1.  **Shared Ownership:** cloning a `Node` is cheap and every clone refers
///     to the same graph vertex. Operations keep their inputs alive through
///     such clones.
/// 2.  **Interior Mutability:** the gradient, producer link and value can be
///     updated through a shared `&Node`, which the backward pass relies on.
pub struct Node {
    pub(crate) data: Arc<RwLock<NodeData>>,
}

/// Non-owning handle to a `Node`, held by the operation that produced it.
#[derive(Clone, Debug)]
pub struct WeakNode(Weak<RwLock<NodeData>>);

impl WeakNode {
    /// Returns the node if something still keeps it alive.
    pub fn upgrade(&self) -> Option<Node> {
        self.0.upgrade().map(|data| Node { data })
    }
}

impl Node {
    /// Creates a leaf node holding `value`.
    ///
    /// Leaf nodes have generation 0, no producer and no gradient.
    pub fn new(value: Value) -> Self {
        Self::from_data(NodeData::new(Some(value)))
    }

    /// Creates a leaf node with no value yet.
    pub fn empty() -> Self {
        Self::from_data(NodeData::new(None))
    }

    /// Creates a 0-dimensional leaf node from any primitive number.
    ///
    /// # Errors
    /// Returns `RevgradError::InvalidValueType` if `x` cannot be represented
    /// as `f64`.
    pub fn from_scalar<T: ToPrimitive>(x: T) -> Result<Self, RevgradError> {
        Ok(Self::new(value::from_scalar(x)?))
    }

    /// Creates a leaf node from a flat, row-major buffer and a shape.
    ///
    /// # Errors
    /// Returns `RevgradError::InvalidValueType` if the buffer length does not
    /// match the shape.
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, RevgradError> {
        Ok(Self::new(value::from_shape_vec(shape, data)?))
    }

    fn from_data(node_data: NodeData) -> Self {
        Node {
            data: Arc::new(RwLock::new(node_data)),
        }
    }

    /// Acquires a read lock on the node's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> std::sync::RwLockReadGuard<'_, NodeData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, NodeData> {
        self.data.write().expect("RwLock poisoned")
    }

    pub(crate) fn downgrade(&self) -> WeakNode {
        WeakNode(Arc::downgrade(&self.data))
    }

    /// Returns a clone of the node's value, or `None` for an empty node.
    pub fn value(&self) -> Option<Value> {
        self.read_data().value.clone()
    }

    /// Returns a clone of the node's value.
    ///
    /// # Errors
    /// Returns `RevgradError::InvalidValueType` for an empty node.
    pub fn require_value(&self) -> Result<Value, RevgradError> {
        self.value().ok_or_else(|| {
            RevgradError::InvalidValueType("node holds no value".to_string())
        })
    }

    /// Replaces a leaf's value, e.g. to update a parameter between gradient
    /// computations. Graph history and the stored gradient are left untouched.
    ///
    /// # Errors
    /// * `RevgradError::InplaceModificationError` if the node has a producer.
    ///   Its value may still be read by that operation's consumers during
    ///   backward.
    /// * `RevgradError::ShapeMismatch` if the node already holds a value of a
    ///   different shape.
    pub fn set_value(&self, value: Value) -> Result<(), RevgradError> {
        let mut guard = self.write_data();
        if let Some(producer) = guard.producer.as_ref() {
            return Err(RevgradError::InplaceModificationError {
                operation: "set_value".to_string(),
                reason: format!("node is the output of {}, not a leaf", producer.name()),
            });
        }
        if let Some(current) = guard.value.as_ref() {
            if current.shape() != value.shape() {
                return Err(RevgradError::ShapeMismatch {
                    expected: current.shape().to_vec(),
                    actual: value.shape().to_vec(),
                    operation: "set_value".to_string(),
                });
            }
        }
        guard.value = Some(value);
        Ok(())
    }

    /// Returns the shape of the value, or `None` for an empty node.
    pub fn shape(&self) -> Option<Vec<usize>> {
        self.read_data().value.as_ref().map(|v| v.shape().to_vec())
    }

    /// Returns the number of elements (0 for an empty node).
    pub fn numel(&self) -> usize {
        self.read_data().value.as_ref().map_or(0, |v| v.len())
    }

    pub fn generation(&self) -> usize {
        self.read_data().generation
    }

    pub fn name(&self) -> Option<String> {
        self.read_data().name.clone()
    }

    /// Attaches a label used when rendering the graph.
    pub fn set_name(&self, name: impl Into<String>) {
        self.write_data().name = Some(name.into());
    }

    /// Returns `true` if both handles refer to the same graph vertex.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
