use crate::autograd::Function;
use crate::node::{Node, WeakNode};
use std::fmt;
use std::sync::Arc;

/// Identity of a recorded operation, used as a key while traversing the graph.
///
/// The pointer is never dereferenced; it only needs to be stable while the
/// `Arc<Operation>` it was taken from is alive.
pub(crate) type OperationId = *const Operation;

/// A `Function` application recorded in the computation graph.
///
/// An `Operation` owns its inputs (they were supplied from outside and may be
/// shared with other consumers) but only holds weak handles to the outputs it
/// produced. Each output owns the operation through its `producer` link, so
/// strong edges in both directions would form a cycle that is never freed.
pub struct Operation {
    function: Box<dyn Function>,
    inputs: Vec<Node>,
    outputs: Vec<WeakNode>,
    generation: usize,
}

impl Operation {
    /// Records `function` as the producer of `outputs`.
    ///
    /// The generation is the highest generation among `inputs` (0 if there
    /// are none). Linking each output back to the operation is left to the
    /// caller.
    pub(crate) fn new(function: Box<dyn Function>, inputs: Vec<Node>, outputs: &[Node]) -> Arc<Self> {
        let generation = inputs.iter().map(Node::generation).max().unwrap_or(0);
        Arc::new(Operation {
            function,
            inputs,
            outputs: outputs.iter().map(Node::downgrade).collect(),
            generation,
        })
    }

    pub fn name(&self) -> &'static str {
        self.function.name()
    }

    pub fn function(&self) -> &dyn Function {
        self.function.as_ref()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The nodes this operation consumed, in application order.
    pub fn inputs(&self) -> &[Node] {
        &self.inputs
    }

    /// The nodes this operation produced, in output order.
    ///
    /// An entry is `None` once nothing else keeps that output alive.
    pub fn outputs(&self) -> Vec<Option<Node>> {
        self.outputs.iter().map(WeakNode::upgrade).collect()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    pub(crate) fn id(op: &Arc<Operation>) -> OperationId {
        Arc::as_ptr(op)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operation(name={}, generation={}, inputs={}, outputs={})",
            self.function.name(),
            self.generation,
            self.inputs.len(),
            self.outputs.len()
        )
    }
}
