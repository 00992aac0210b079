//! Full reductions to a 0-dimensional tensor.

pub mod mean;
pub mod sum;

pub use mean::mean_op;
pub use sum::sum_op;
