use std::cell::{Ref, RefMut};
use std::rc::Rc;

use crate::autograd::graph::NodeId;
use crate::autograd::{BackwardOp, OpKind};
use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

impl<T: NumericElement> Tensor<T> {
    /// Provides temporary immutable access to the internal `TensorData`.
    /// The `Ref` acts like a read lock; drop it promptly.
    pub(crate) fn read_data(&self) -> Ref<'_, TensorData<T>> {
        self.data.borrow()
    }

    /// Provides temporary mutable access to the internal `TensorData`.
    pub(crate) fn write_data(&self) -> RefMut<'_, TensorData<T>> {
        self.data.borrow_mut()
    }

    /// Stable identity of the node, used as key during graph traversal.
    pub(crate) fn node_id(&self) -> NodeId<T> {
        Rc::as_ptr(&self.data)
    }

    /// Returns the shape of the tensor (cloned).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns a copy of the payload.
    pub fn data(&self) -> Vec<T> {
        self.read_data().data.clone()
    }

    /// Returns a copy of the gradient buffer.
    ///
    /// Before any backward pass has reached this tensor, the buffer is all zeros.
    pub fn grad(&self) -> Vec<T> {
        self.read_data().grad.clone()
    }

    /// Returns the single value held by a one-element tensor.
    pub fn item(&self) -> Result<T, MinigradError> {
        let guard = self.read_data();
        match guard.data.as_slice() {
            [value] => Ok(*value),
            _ => Err(MinigradError::NotScalar {
                shape: guard.shape.clone(),
            }),
        }
    }

    /// Returns the single gradient value of a one-element tensor.
    pub fn grad_item(&self) -> Result<T, MinigradError> {
        let guard = self.read_data();
        match guard.grad.as_slice() {
            [value] => Ok(*value),
            _ => Err(MinigradError::NotScalar {
                shape: guard.shape.clone(),
            }),
        }
    }

    /// Checks if this tensor requires gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// A leaf was created directly rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns a clone of the `Rc` pointing to the backward node, if any.
    pub(crate) fn grad_fn(&self) -> Option<Rc<BackwardOp<T>>> {
        self.read_data().grad_fn.clone()
    }

    /// The kind of operation that produced this tensor (`None` for leaves and
    /// for results that were not recorded).
    pub fn op(&self) -> Option<OpKind> {
        self.read_data().grad_fn.as_ref().map(|grad_fn| grad_fn.kind())
    }

    /// The operands this tensor was derived from, in argument order.
    pub fn parents(&self) -> Vec<Tensor<T>> {
        match self.grad_fn() {
            Some(grad_fn) => grad_fn.inputs().into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }
}
