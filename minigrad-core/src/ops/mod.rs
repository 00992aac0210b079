//! # Tensor Operations Module (`ops`)
//!
//! Every differentiable operation lives here, grouped by family.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `relu_op`, ...)
//!   that validates shapes, computes the forward result eagerly and, when an
//!   operand requires gradients, records the backward node on the output.
//!   The same functions back the builder methods on [`Tensor`].
//! - **`Backward` Structs:** Each operation has a context struct (`AddBackward`,
//!   `SigmoidBackward`, ...) implementing
//!   [`BackwardRule`](crate::autograd::BackwardRule). It stores exactly the
//!   forward state its gradient rule needs.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow, square.
//! - [`activation`]: relu, sigmoid, tanh.
//! - [`reduction`]: sum, mean.
//! - [`concat`]: concatenation along an axis.
//! - [`traits`]: the `NumericElement` bound.

use std::rc::Rc;

use crate::autograd::{is_grad_enabled, BackwardOp};
use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

pub mod activation;
pub mod arithmetic;
pub mod concat;
pub mod reduction;
pub mod traits;

/// Resolves the output shape of an element-wise binary operation.
///
/// Operands must have identical shapes, or one of them must hold a single
/// element, in which case it is broadcast against the other.
pub(crate) fn broadcast_scalar_shapes(
    a_shape: &[usize],
    b_shape: &[usize],
    op_name: &str,
) -> Result<Vec<usize>, MinigradError> {
    if a_shape == b_shape {
        return Ok(a_shape.to_vec());
    }
    let a_numel: usize = a_shape.iter().product();
    let b_numel: usize = b_shape.iter().product();
    if a_numel == 1 {
        Ok(b_shape.to_vec())
    } else if b_numel == 1 {
        Ok(a_shape.to_vec())
    } else {
        Err(MinigradError::ShapeMismatch {
            expected: a_shape.to_vec(),
            actual: b_shape.to_vec(),
            operation: op_name.to_string(),
        })
    }
}

/// Index into an operand that may be a broadcast single element.
#[inline]
pub(crate) fn broadcast_index(len: usize, i: usize) -> usize {
    if len == 1 {
        0
    } else {
        i
    }
}

/// Sums a gradient back down to a broadcast single-element operand.
pub(crate) fn reduce_to_numel<T: NumericElement>(grad: Vec<T>, numel: usize) -> Vec<T> {
    if grad.len() == numel {
        grad
    } else {
        vec![grad.into_iter().fold(T::zero(), |acc, g| acc + g)]
    }
}

/// Attaches a backward node to a freshly computed output.
fn record_backward<T: NumericElement>(output: &Tensor<T>, grad_fn: BackwardOp<T>) {
    let mut guard = output.write_data();
    guard.grad_fn = Some(Rc::new(grad_fn));
    guard.requires_grad = true;
}

/// Applies a unary element-wise operation to a tensor.
///
/// Handles output creation and autograd setup. `backward_builder` receives a
/// handle to the input and the computed output data (for rules that reuse the
/// forward result) and is only called when a node must be recorded.
pub(crate) fn apply_unary_op<T, F, B>(
    a: &Tensor<T>,
    op: F,
    backward_builder: B,
) -> Result<Tensor<T>, MinigradError>
where
    T: NumericElement,
    F: Fn(T) -> T,
    B: FnOnce(Tensor<T>, &[T]) -> BackwardOp<T>,
{
    let (output_data, output_shape) = {
        let a_guard = a.read_data();
        let data: Vec<T> = a_guard.data.iter().map(|&val| op(val)).collect();
        (data, a_guard.shape.clone())
    };

    let output = Tensor::from_parts(output_data, output_shape);
    if is_grad_enabled() && a.requires_grad() {
        let grad_fn = {
            let output_guard = output.read_data();
            backward_builder(a.clone(), &output_guard.data)
        };
        record_backward(&output, grad_fn);
    }

    Ok(output)
}

/// Applies a binary element-wise operation with single-element broadcasting.
///
/// # Errors
/// `ShapeMismatch` if the operand shapes are incompatible. No node is created
/// in that case.
pub(crate) fn apply_binary_op<T, F, B>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    op: F,
    backward_builder: B,
    op_name: &str,
) -> Result<Tensor<T>, MinigradError>
where
    T: NumericElement,
    F: Fn(T, T) -> T,
    B: FnOnce(Tensor<T>, Tensor<T>) -> BackwardOp<T>,
{
    let (output_data, output_shape) = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        let output_shape = broadcast_scalar_shapes(&a_guard.shape, &b_guard.shape, op_name)?;
        let numel: usize = output_shape.iter().product();
        let (a_len, b_len) = (a_guard.data.len(), b_guard.data.len());
        let data: Vec<T> = (0..numel)
            .map(|i| {
                op(
                    a_guard.data[broadcast_index(a_len, i)],
                    b_guard.data[broadcast_index(b_len, i)],
                )
            })
            .collect();
        (data, output_shape)
    };

    let output = Tensor::from_parts(output_data, output_shape);
    if is_grad_enabled() && (a.requires_grad() || b.requires_grad()) {
        record_backward(&output, backward_builder(a.clone(), b.clone()));
    }

    Ok(output)
}

/// Records a node for operations that do not fit the element-wise helpers
/// (reductions, concatenation).
pub(crate) fn finish_op<T, B>(output: Tensor<T>, inputs_require_grad: bool, backward_builder: B) -> Tensor<T>
where
    T: NumericElement,
    B: FnOnce() -> BackwardOp<T>,
{
    if is_grad_enabled() && inputs_require_grad {
        record_backward(&output, backward_builder());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_same_shape() {
        assert_eq!(broadcast_scalar_shapes(&[3], &[3], "add").unwrap(), vec![3]);
    }

    #[test]
    fn test_broadcast_scalar_against_vector() {
        assert_eq!(broadcast_scalar_shapes(&[], &[4], "mul").unwrap(), vec![4]);
        assert_eq!(broadcast_scalar_shapes(&[2, 2], &[1], "mul").unwrap(), vec![2, 2]);
    }

    #[test]
    fn test_broadcast_mismatched_vectors() {
        let err = broadcast_scalar_shapes(&[2], &[3], "add").unwrap_err();
        assert_eq!(
            err,
            MinigradError::ShapeMismatch {
                expected: vec![2],
                actual: vec![3],
                operation: "add".to_string(),
            }
        );
    }

    #[test]
    fn test_reduce_to_numel_sums_broadcast_grad() {
        assert_eq!(reduce_to_numel(vec![1.0_f64, 2.0, 3.0], 1), vec![6.0]);
        assert_eq!(reduce_to_numel(vec![1.0_f64, 2.0], 2), vec![1.0, 2.0]);
    }
}
