// src/node/traits.rs

use crate::error::RevgradError;
use crate::node::Node;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

impl Clone for Node {
    /// Shallow clone: the new handle refers to the same graph vertex.
    fn clone(&self) -> Self {
        Node {
            data: Arc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => write!(
                f,
                "Node(name={:?}, shape={:?}, generation={}, has_grad={}, producer={})",
                guard.name,
                guard.value.as_ref().map(|v| v.shape().to_vec()),
                guard.generation,
                guard.grad.is_some(),
                guard.producer.as_ref().map_or("None", |op| op.name()),
            ),
            Err(_) => write!(f, "Node(Error: RwLock poisoned)"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        match guard.value.as_ref() {
            Some(v) => {
                let rendered = v.to_string().replace('\n', "\n         ");
                write!(f, "variable({})", rendered)
            }
            None => write!(f, "variable(None)"),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::new(value)
    }
}

impl From<f64> for Node {
    fn from(x: f64) -> Self {
        Node::new(crate::value::scalar(x))
    }
}

/// Conversion of operation arguments into graph nodes.
///
/// Nodes pass through unchanged; raw values and numbers become fresh leaf
/// nodes.
pub trait IntoNode {
    fn into_node(self) -> Result<Node, RevgradError>;
}

impl IntoNode for Node {
    fn into_node(self) -> Result<Node, RevgradError> {
        Ok(self)
    }
}

impl IntoNode for &Node {
    fn into_node(self) -> Result<Node, RevgradError> {
        Ok(self.clone())
    }
}

impl IntoNode for Value {
    fn into_node(self) -> Result<Node, RevgradError> {
        Ok(Node::new(self))
    }
}

macro_rules! impl_into_node_for_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoNode for $t {
                fn into_node(self) -> Result<Node, RevgradError> {
                    Node::from_scalar(self)
                }
            }
        )*
    };
}

impl_into_node_for_scalar!(f64, f32, i32, i64, u32, u64, usize);
