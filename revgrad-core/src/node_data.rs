// src/node_data.rs
use std::sync::Arc;

use crate::autograd::Operation;
use crate::value::Value;

/// Internal storage behind a `Node`.
///
/// Wrapped in `Arc<RwLock<NodeData>>` by `Node` so that gradients and
/// producer links can be updated through shared handles.
#[derive(Debug)]
pub struct NodeData {
    /// The numeric payload. `None` only for nodes built with `Node::empty`.
    pub(crate) value: Option<Value>,
    /// Gradient of the most recent terminal w.r.t. this node, same shape as
    /// `value`. Populated by the backward pass.
    pub(crate) grad: Option<Value>,
    /// The operation that produced this node. Leaf nodes have `None`.
    pub(crate) producer: Option<Arc<Operation>>,
    /// 0 for leaves, `producer.generation() + 1` otherwise.
    pub(crate) generation: usize,
    /// Optional label for diagnostics.
    pub(crate) name: Option<String>,
}

impl NodeData {
    pub(crate) fn new(value: Option<Value>) -> Self {
        NodeData {
            value,
            grad: None,
            producer: None,
            generation: 0,
            name: None,
        }
    }
}
