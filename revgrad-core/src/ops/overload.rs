//! Arithmetic operators on nodes.
//!
//! Every operator records the matching primitive and returns
//! `Result<Node, RevgradError>`, so shape errors propagate with `?`:
//!
//! ```
//! use revgrad_core::{Node, RevgradError};
//!
//! # fn main() -> Result<(), RevgradError> {
//! let x = Node::from(1.0);
//! let y = (&(&x + 3.0)? * &x)?;
//! y.backward()?;
//! assert_eq!(x.grad().unwrap()[[]], 5.0);
//! # Ok(())
//! # }
//! ```

use super::{add, div, mul, neg, sub};
use crate::error::RevgradError;
use crate::node::Node;

macro_rules! impl_binary_overload {
    ($trait:ident, $method:ident, $func:ident) => {
        impl std::ops::$trait<&Node> for &Node {
            type Output = Result<Node, RevgradError>;
            fn $method(self, rhs: &Node) -> Self::Output {
                $func(self, rhs)
            }
        }

        impl std::ops::$trait<Node> for Node {
            type Output = Result<Node, RevgradError>;
            fn $method(self, rhs: Node) -> Self::Output {
                $func(self, rhs)
            }
        }

        impl std::ops::$trait<f64> for &Node {
            type Output = Result<Node, RevgradError>;
            fn $method(self, rhs: f64) -> Self::Output {
                $func(self, rhs)
            }
        }

        impl std::ops::$trait<f64> for Node {
            type Output = Result<Node, RevgradError>;
            fn $method(self, rhs: f64) -> Self::Output {
                $func(self, rhs)
            }
        }

        impl std::ops::$trait<&Node> for f64 {
            type Output = Result<Node, RevgradError>;
            fn $method(self, rhs: &Node) -> Self::Output {
                $func(self, rhs)
            }
        }

        impl std::ops::$trait<Node> for f64 {
            type Output = Result<Node, RevgradError>;
            fn $method(self, rhs: Node) -> Self::Output {
                $func(self, rhs)
            }
        }
    };
}

impl_binary_overload!(Add, add, add);
impl_binary_overload!(Sub, sub, sub);
impl_binary_overload!(Mul, mul, mul);
impl_binary_overload!(Div, div, div);

impl std::ops::Neg for &Node {
    type Output = Result<Node, RevgradError>;
    fn neg(self) -> Self::Output {
        neg(self)
    }
}

impl std::ops::Neg for Node {
    type Output = Result<Node, RevgradError>;
    fn neg(self) -> Self::Output {
        neg(self)
    }
}

#[cfg(test)]
#[path = "overload_test.rs"]
mod tests;
