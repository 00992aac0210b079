use crate::error::MinigradError;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, square_op, sub_op};
use crate::ops::concat::concatenate_op;
use crate::ops::reduction::{mean_op, sum_op};
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Builder-style methods. Each one computes its result eagerly and, when
/// gradients are tracked, records the node that produced it.
impl<T: NumericElement> Tensor<T> {
    /// Element-wise addition. See [`add_op`].
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
        add_op(self, other)
    }

    /// Element-wise subtraction. See [`sub_op`].
    pub fn sub(&self, other: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
        sub_op(self, other)
    }

    /// Element-wise multiplication. See [`mul_op`].
    pub fn mul(&self, other: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
        mul_op(self, other)
    }

    /// Element-wise division. See [`div_op`].
    pub fn div(&self, other: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
        div_op(self, other)
    }

    pub fn neg(&self) -> Result<Tensor<T>, MinigradError> {
        neg_op(self)
    }

    /// Raises every element to a constant power.
    pub fn pow(&self, exponent: T) -> Result<Tensor<T>, MinigradError> {
        pow_op(self, exponent)
    }

    pub fn square(&self) -> Result<Tensor<T>, MinigradError> {
        square_op(self)
    }

    pub fn relu(&self) -> Result<Tensor<T>, MinigradError> {
        relu_op(self)
    }

    pub fn sigmoid(&self) -> Result<Tensor<T>, MinigradError> {
        sigmoid_op(self)
    }

    pub fn tanh(&self) -> Result<Tensor<T>, MinigradError> {
        tanh_op(self)
    }

    /// Sum of all elements as a 0-dimensional tensor.
    pub fn sum(&self) -> Result<Tensor<T>, MinigradError> {
        sum_op(self)
    }

    /// Mean of all elements as a 0-dimensional tensor.
    pub fn mean(&self) -> Result<Tensor<T>, MinigradError> {
        mean_op(self)
    }

    /// Concatenates `other` after `self` along `axis`. See [`concatenate_op`].
    pub fn concatenate(&self, other: &Tensor<T>, axis: usize) -> Result<Tensor<T>, MinigradError> {
        concatenate_op(self, other, axis)
    }
}
