use crate::autograd::operation::{Operation, OperationId};
use crate::error::RevgradError;
use crate::node::Node;
use crate::value::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Pending operations for one backward traversal, ordered by generation.
///
/// `ops` is kept sorted ascending by generation after every insertion, so the
/// operation with the highest generation sits at the end. The sort is stable:
/// among equal generations the most recently inserted one is taken first.
struct Worklist {
    ops: Vec<Arc<Operation>>,
    seen: HashSet<OperationId>,
}

impl Worklist {
    fn new() -> Self {
        Worklist {
            ops: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Queues `op` unless it has already been queued during this traversal.
    fn add_operation(&mut self, op: Arc<Operation>) {
        if !self.seen.insert(Operation::id(&op)) {
            return;
        }
        self.ops.push(op);
        self.ops.sort_by_key(|op| op.generation());
    }

    fn pop(&mut self) -> Option<Arc<Operation>> {
        self.ops.pop()
    }
}

/// Collects the gradient of every output of `op`, in output order.
fn output_gradients(op: &Operation) -> Result<(Vec<Node>, Vec<Value>), RevgradError> {
    let mut outputs = Vec::with_capacity(op.num_outputs());
    let mut gys = Vec::with_capacity(op.num_outputs());

    for (index, output) in op.outputs().into_iter().enumerate() {
        let output = match output {
            Some(node) => node,
            None => {
                let message = format!(
                    "output {} of {:?} was dropped before its gradient was consumed",
                    index, op
                );
                log::error!("{}", message);
                return Err(RevgradError::BrokenInvariant(message));
            }
        };
        match output.grad() {
            Some(gy) => gys.push(gy),
            None => {
                let message = format!("output {} of {:?} has no gradient", index, op);
                log::error!("{}", message);
                return Err(RevgradError::BrokenInvariant(message));
            }
        }
        outputs.push(output);
    }

    Ok((outputs, gys))
}

/// Runs the backward pass starting from `start`, the producer of a terminal
/// node whose gradient is already seeded.
///
/// Each reachable operation is processed exactly once, highest generation
/// first. Every operation with a generation above `op.generation()` that
/// consumes one of `op`'s outputs therefore runs before `op`, so all output
/// gradients are complete when `op.backward` is called.
pub(crate) fn run_backward(start: Arc<Operation>, retain_intermediate: bool) -> Result<(), RevgradError> {
    let mut worklist = Worklist::new();
    worklist.add_operation(start);

    while let Some(op) = worklist.pop() {
        log::trace!("backward through {:?}", op);

        let (outputs, gys) = output_gradients(&op)?;
        let xs = op
            .inputs()
            .iter()
            .map(Node::require_value)
            .collect::<Result<Vec<Value>, RevgradError>>()?;

        let gxs = op.function().backward(&xs, &gys)?;
        if gxs.len() != op.inputs().len() {
            return Err(RevgradError::ArityMismatch {
                operation: format!("{}::backward", op.name()),
                expected: op.inputs().len(),
                actual: gxs.len(),
            });
        }

        for (input, gx) in op.inputs().iter().zip(gxs) {
            input.accumulate_gradient(gx)?;
            if let Some(producer) = input.producer() {
                worklist.add_operation(producer);
            }
        }

        if !retain_intermediate {
            for output in &outputs {
                output.clear_gradient();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
