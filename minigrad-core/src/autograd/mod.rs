//! # Autograd
//!
//! Reverse-mode differentiation over the graph recorded by the operations in
//! [`ops`](crate::ops).
//!
//! - [`backward_op`]: the closed set of backward nodes and the `BackwardRule` interface.
//! - [`graph`]: topological ordering of the recorded graph.
//! - [`grad_mode`]: `no_grad` scopes.
//! - [`grad_check`]: finite-difference validation of backward rules.
//!
//! The propagation loop itself is [`Tensor::backward`](crate::Tensor::backward).

pub mod backward_op;
pub mod grad_check;
pub mod grad_mode;
pub(crate) mod graph;

pub use backward_op::{BackwardOp, BackwardRule, InputGrads, OpKind};
pub use grad_mode::{is_grad_enabled, no_grad, NoGradGuard};
