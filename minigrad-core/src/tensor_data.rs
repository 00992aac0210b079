// src/tensor_data.rs
use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::error::MinigradError;
use crate::ops::traits::NumericElement;

/// Internal storage and metadata for a Tensor.
///
/// Holds the row-major data, its shape, and the autograd bookkeeping.
/// It is wrapped in `Rc<RefCell<TensorData>>` by the `Tensor` handle so that
/// a node can be shared by every child that consumes it.
pub struct TensorData<T> {
    /// Flattened, row-major payload. Never mutated after construction.
    pub(crate) data: Vec<T>,
    /// Dimensions of the tensor. `[]` is a scalar.
    pub(crate) shape: Vec<usize>,
    /// If false, the node is a constant for the backward pass.
    pub(crate) requires_grad: bool,
    /// Gradient accumulator, same length as `data`. Starts at zero.
    pub(crate) grad: Vec<T>,
    /// The backward node of the operation that produced this tensor.
    /// Leaf tensors have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<BackwardOp<T>>>,
}

impl<T: NumericElement> TensorData<T> {
    /// Creates a new leaf `TensorData` with a zeroed gradient buffer.
    ///
    /// # Errors
    /// Returns `MinigradError::TensorCreationError` if the length of `data` does not
    /// match the number of elements described by `shape`.
    pub fn new(data: Vec<T>, shape: Vec<usize>) -> Result<Self, MinigradError> {
        let numel: usize = shape.iter().product();
        let data_len = data.len();
        if data_len != numel {
            return Err(MinigradError::TensorCreationError { data_len, shape });
        }

        Ok(TensorData {
            grad: vec![T::zero(); numel],
            data,
            shape,
            requires_grad: false,
            grad_fn: None,
        })
    }

    pub(crate) fn numel(&self) -> usize {
        self.data.len()
    }

    /// Adds `grad_to_add` element-wise into the gradient buffer.
    pub(crate) fn accumulate_grad(&mut self, grad_to_add: &[T]) -> Result<(), MinigradError> {
        if grad_to_add.len() != self.grad.len() {
            return Err(MinigradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: vec![grad_to_add.len()],
                operation: "accumulate_grad".to_string(),
            });
        }
        for (acc, g) in self.grad.iter_mut().zip(grad_to_add) {
            *acc += *g;
        }
        Ok(())
    }
}

// Unlinks the history iteratively: the default drop would recurse once per
// node through `grad_fn -> operand -> grad_fn` and overflow on long chains.
impl<T> Drop for TensorData<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Rc<BackwardOp<T>>> = self.grad_fn.take().into_iter().collect();
        while let Some(node) = pending.pop() {
            // Still shared with another handle: that owner frees it later.
            let Ok(op) = Rc::try_unwrap(node) else {
                continue;
            };
            for operand in op.operand_handles() {
                if Rc::strong_count(&operand.data) != 1 {
                    continue;
                }
                if let Ok(mut guard) = operand.data.try_borrow_mut() {
                    pending.extend(guard.grad_fn.take());
                }
            }
            // `op` drops here; operands we unlinked have no history left.
        }
    }
}

// Cannot derive Debug: the backward node holds the parent handles.
impl<T: Debug> Debug for TensorData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorData")
            .field("data", &self.data)
            .field("shape", &self.shape)
            .field("requires_grad", &self.requires_grad)
            .field("grad", &self.grad)
            .field("grad_fn_defined", &self.grad_fn.is_some())
            .finish()
    }
}
