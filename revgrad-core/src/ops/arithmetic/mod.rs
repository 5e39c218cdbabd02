pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::{add, Add};
pub use div::{div, Div};
pub use mul::{mul, Mul};
pub use neg::{neg, Neg};
pub use pow::{pow, Pow};
pub use sub::{sub, Sub};
