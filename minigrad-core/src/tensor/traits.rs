// src/tensor/traits.rs

use std::fmt;
use std::rc::Rc;

use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

impl<T> Clone for Tensor<T> {
    /// Shallow clone: the new handle points at the same node.
    fn clone(&self) -> Self {
        Tensor {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T: NumericElement> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Tensor(shape={:?}, requires_grad={}, op={:?}, data={:?}, grad={:?})",
            guard.shape,
            guard.requires_grad,
            guard.grad_fn.as_ref().map(|grad_fn| grad_fn.kind()),
            guard.data,
            guard.grad
        )
    }
}

impl<T: NumericElement> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        if guard.shape.is_empty() {
            write!(f, "{}", guard.data[0])
        } else {
            write!(f, "{:?}", guard.data)
        }
    }
}
