//! A minimal reverse-mode automatic differentiation engine.
//!
//! Tensors are built eagerly through builder methods (`x.square()?`,
//! `a.mul(&b)?`). Each result remembers the operation and operands that
//! produced it, and [`Tensor::backward`] walks that graph in reverse to
//! accumulate gradients into every node that requires them.
//!
//! ```
//! use minigrad_core::Tensor;
//!
//! let x = Tensor::scalar(2.0_f64).with_grad();
//! let y = x.pow(3.0)?;
//! y.backward(None)?;
//! assert_eq!(y.item()?, 8.0);
//! assert_eq!(x.grad_item()?, 12.0);
//! # Ok::<(), minigrad_core::MinigradError>(())
//! ```

pub mod autograd;
pub mod ops;
pub mod tensor;
pub mod tensor_data;

pub mod error;

// Re-export the main types so they are reachable as `minigrad_core::Tensor`, ...
pub use autograd::{is_grad_enabled, no_grad, NoGradGuard, OpKind};
pub use error::MinigradError;
pub use ops::traits::NumericElement;
pub use tensor::Tensor;
// Re-export traits required by public functions/structs
pub use num_traits;
