// src/tensor/mod.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::tensor_data::TensorData;

mod accessors;
mod autograd_methods;
pub mod create;
mod op_methods;
mod traits;

pub use create::{full, ones, ones_like, rand, rand_with_rng, randn, randn_with_rng, zeros, zeros_like};

/// A node of the computation graph: a numeric payload plus its gradient.
///
/// `Tensor` uses `Rc<RefCell<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** the same node can feed several downstream
///     operations (a graph, not a tree). Clones are cheap handle copies.
/// 2.  **Interior Mutability:** the gradient buffer is written during the
///     backward pass through an immutable handle.
///
/// Handles are deliberately `!Send`; a graph belongs to one thread.
pub struct Tensor<T = f64> {
    pub(crate) data: Rc<RefCell<TensorData<T>>>,
}

impl<T: NumericElement> Tensor<T> {
    /// Creates a new leaf tensor from row-major data and a shape.
    /// Gradient tracking is disabled.
    pub fn new(data: Vec<T>, shape: Vec<usize>) -> Result<Self, MinigradError> {
        let tensor_data = TensorData::new(data, shape)?;
        Ok(Tensor {
            data: Rc::new(RefCell::new(tensor_data)),
        })
    }

    /// Creates a leaf tensor with an explicit `requires_grad` flag.
    ///
    /// The gradient buffer is all zeros and shaped like `data`.
    pub fn leaf(data: Vec<T>, shape: Vec<usize>, requires_grad: bool) -> Result<Self, MinigradError> {
        let tensor = Self::new(data, shape)?;
        tensor.write_data().requires_grad = requires_grad;
        Ok(tensor)
    }

    /// Creates a 0-dimensional leaf tensor.
    pub fn scalar(value: T) -> Self {
        Self::from_parts(vec![value], vec![])
    }

    /// Creates a 1-D leaf tensor from a vector.
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Self::from_parts(values, vec![len])
    }

    /// Builds a tensor from data whose length is already known to match `shape`.
    pub(crate) fn from_parts(data: Vec<T>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());
        let numel = data.len();
        Tensor {
            data: Rc::new(RefCell::new(TensorData {
                data,
                shape,
                requires_grad: false,
                grad: vec![T::zero(); numel],
                grad_fn: None,
            })),
        }
    }

    /// Initialize with the requires_grad flag set.
    ///
    /// Meant for freshly created leaves: `Tensor::scalar(4.0).with_grad()`.
    pub fn with_grad(self) -> Self {
        self.write_data().requires_grad = true;
        self
    }
}
