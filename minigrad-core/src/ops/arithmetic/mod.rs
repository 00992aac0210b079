//! Element-wise arithmetic: add, sub, mul, div, neg, pow, square.
//!
//! Binary operations accept equal shapes or a single-element operand that is
//! broadcast against the other one.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod square;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use square::square_op;
pub use sub::sub_op;
