use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::finish_op;
use crate::ops::reduction::sum::scalar_grad;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Backward context for the mean: each input element receives `grad / n`.
pub struct MeanBackward<T> {
    pub(crate) input: Tensor<T>,
}

impl<T: NumericElement> BackwardRule<T> for MeanBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        if !self.input.requires_grad() {
            return Ok(vec![None]);
        }
        let g = scalar_grad(grad_output, "mean")?;
        let numel = self.input.numel();
        let share = g / T::from_f64(numel as f64);
        Ok(vec![Some(vec![share; numel])])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.input]
    }
}

/// Arithmetic mean of all elements as a 0-dimensional tensor.
///
/// # Errors
/// `EmptyTensor` if the input has no elements.
pub fn mean_op<T: NumericElement>(input: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    let mean = {
        let guard = input.read_data();
        if guard.data.is_empty() {
            return Err(MinigradError::EmptyTensor {
                operation: "mean".to_string(),
            });
        }
        let total = guard.data.iter().fold(T::zero(), |acc, &x| acc + x);
        total / T::from_f64(guard.data.len() as f64)
    };
    let output = Tensor::from_parts(vec![mean], vec![]);
    let input = input.clone();
    Ok(finish_op(output, input.requires_grad(), || {
        BackwardOp::Mean(MeanBackward { input })
    }))
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
