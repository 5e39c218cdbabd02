use crate::autograd::{graph, Operation};
use crate::error::RevgradError;
use crate::node::Node;
use crate::value::{self, Value};
use std::sync::Arc;

impl Node {
    /// Returns a clone of the gradient, if one has been computed.
    pub fn grad(&self) -> Option<Value> {
        self.read_data().grad.clone()
    }

    /// Returns the operation that produced this node (`None` for leaves and
    /// for nodes produced while recording was disabled).
    pub fn producer(&self) -> Option<Arc<Operation>> {
        self.read_data().producer.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().producer.is_none()
    }

    /// Links this node to the operation that produced it and stamps its
    /// generation one above the operation's.
    pub(crate) fn set_producer(&self, op: &Arc<Operation>) {
        let mut guard = self.write_data();
        guard.generation = op.generation() + 1;
        guard.producer = Some(Arc::clone(op));
    }

    /// Adds `grad` to the stored gradient, or stores it if there is none.
    ///
    /// A node holding a 0-dimensional value that was broadcast in the forward
    /// pass receives the sum of `grad`. The sum is a fresh array; neither
    /// `grad` nor the previous gradient is modified, since either may be
    /// shared with another consumer.
    ///
    /// # Errors
    /// Returns `RevgradError::ShapeMismatch` if `grad` cannot be reduced to the
    /// shape of the node's value. The stored gradient is left untouched.
    pub fn accumulate_gradient(&self, grad: Value) -> Result<(), RevgradError> {
        let mut guard = self.write_data();

        let grad = match guard.value.as_ref() {
            Some(v) => value::sum_to_shape(grad, v.shape(), "accumulate_gradient")?,
            None => grad,
        };

        let accumulated = match guard.grad.as_ref() {
            Some(existing) => {
                value::zip_with(existing, &grad, "accumulate_gradient", |a, b| a + b)?
            }
            None => grad,
        };
        guard.grad = Some(accumulated);
        Ok(())
    }

    /// Resets the gradient to `None`.
    ///
    /// Call this on leaves between gradient computations that should not
    /// accumulate into each other.
    pub fn clear_gradient(&self) {
        self.write_data().grad = None;
    }

    /// Creates a leaf node holding a copy of this node's value, with no graph
    /// history and no gradient.
    pub fn detach(&self) -> Node {
        match self.value() {
            Some(v) => Node::new(v),
            None => Node::empty(),
        }
    }

    /// Computes the gradient of this node w.r.t. every upstream node.
    ///
    /// If this node has no gradient yet it is seeded with ones shaped like its
    /// value. Gradients are accumulated into every input reached; unless
    /// `retain_intermediate` is set, the gradients of non-leaf nodes are
    /// released as soon as their producer has consumed them.
    ///
    /// # Errors
    /// * `RevgradError::InvalidValueType` if this node is empty and has no
    ///   gradient to start from.
    /// * Any error returned by a `Function::backward` or by gradient
    ///   accumulation.
    /// * `RevgradError::BrokenInvariant` if an output gradient is missing when
    ///   its producer is processed. Gradients accumulated before the failure
    ///   are undefined.
    pub fn compute_gradients(&self, retain_intermediate: bool) -> Result<(), RevgradError> {
        {
            let mut guard = self.write_data();
            if guard.grad.is_none() {
                let seed = match guard.value.as_ref() {
                    Some(v) => value::ones_like(v),
                    None => {
                        return Err(RevgradError::InvalidValueType(
                            "cannot seed the gradient of an empty node".to_string(),
                        ))
                    }
                };
                guard.grad = Some(seed);
            }
        }

        match self.producer() {
            Some(op) => graph::run_backward(op, retain_intermediate),
            None => {
                log::debug!("compute_gradients() called on a leaf node. No operation to perform.");
                Ok(())
            }
        }
    }

    /// Shorthand for `compute_gradients(false)`.
    pub fn backward(&self) -> Result<(), RevgradError> {
        self.compute_gradients(false)
    }
}
