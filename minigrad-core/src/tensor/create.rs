// src/tensor/create.rs

use rand::distributions::Standard;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros<T: NumericElement>(shape: &[usize]) -> Result<Tensor<T>, MinigradError> {
    full(shape, T::zero())
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones<T: NumericElement>(shape: &[usize]) -> Result<Tensor<T>, MinigradError> {
    full(shape, T::one())
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full<T: NumericElement>(shape: &[usize], value: T) -> Result<Tensor<T>, MinigradError> {
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a tensor of zeros with the same shape as `tensor`.
pub fn zeros_like<T: NumericElement>(tensor: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    zeros(&tensor.shape())
}

/// Creates a tensor of ones with the same shape as `tensor`.
pub fn ones_like<T: NumericElement>(tensor: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    ones(&tensor.shape())
}

/// Samples every element uniformly from `[0, 1)` using the thread-local RNG.
pub fn rand<T: NumericElement>(shape: &[usize]) -> Result<Tensor<T>, MinigradError> {
    rand_with_rng(shape, &mut rand::thread_rng())
}

/// Samples every element from the standard normal distribution using the
/// thread-local RNG.
pub fn randn<T: NumericElement>(shape: &[usize]) -> Result<Tensor<T>, MinigradError> {
    randn_with_rng(shape, &mut rand::thread_rng())
}

/// Like [`rand`], drawing from the given generator.
pub fn rand_with_rng<T, R>(shape: &[usize], rng: &mut R) -> Result<Tensor<T>, MinigradError>
where
    T: NumericElement,
    R: Rng + ?Sized,
{
    sample_with(shape, rng, &Standard)
}

/// Like [`randn`], drawing from the given generator.
pub fn randn_with_rng<T, R>(shape: &[usize], rng: &mut R) -> Result<Tensor<T>, MinigradError>
where
    T: NumericElement,
    R: Rng + ?Sized,
{
    sample_with(shape, rng, &StandardNormal)
}

fn sample_with<T, R, D>(shape: &[usize], rng: &mut R, dist: &D) -> Result<Tensor<T>, MinigradError>
where
    T: NumericElement,
    R: Rng + ?Sized,
    D: Distribution<f64>,
{
    let numel: usize = shape.iter().product();
    let data: Vec<T> = (0..numel).map(|_| T::from_f64(dist.sample(rng))).collect();
    Tensor::new(data, shape.to_vec())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
