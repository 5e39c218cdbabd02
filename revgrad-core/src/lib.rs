//! # revgrad-core
//!
//! A define-by-run, reverse-mode automatic differentiation engine.
//!
//! Applying an operation to [`Node`]s computes the result immediately and,
//! while recording is enabled, links the result to the [`Operation`] that
//! produced it. [`Node::compute_gradients`] then walks those links backward in
//! generation order and accumulates gradients into every upstream node.
//!
//! ```
//! use revgrad_core::ops::{exp, square};
//! use revgrad_core::{Node, RevgradError};
//!
//! # fn main() -> Result<(), RevgradError> {
//! let x = Node::from(0.5);
//! let y = square(exp(square(&x)?)?)?;
//! y.backward()?;
//! assert!((x.grad().unwrap()[[]] - 3.297442541400256).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod node;
pub(crate) mod node_data;
pub mod ops;
pub mod utils;
pub mod value;

pub use autograd::{Function, Operation};
pub use error::RevgradError;
pub use node::{IntoNode, Node};
pub use value::Value;

// Re-export the numeric crates that appear in the public API
pub use ndarray;
pub use num_traits;
