//! # Autograd
//!
//! The graph model and the backward scheduler:
//!
//! - [`Function`]: forward/backward rules of a differentiable primitive.
//! - [`Operation`]: a recorded application of a `Function`, linking input
//!   nodes (owned) to output nodes (weak).
//! - `graph`: generation-ordered traversal driven by
//!   [`Node::compute_gradients`](crate::Node::compute_gradients).
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod function;
pub mod grad_check;
pub(crate) mod graph;
pub mod operation;

pub use function::Function;
pub use operation::Operation;
