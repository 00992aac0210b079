use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::finish_op;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

// --- Backward Operation ---

/// Backward context for the full sum: the output gradient is broadcast back
/// to every input element.
pub struct SumBackward<T> {
    pub(crate) input: Tensor<T>,
}

impl<T: NumericElement> BackwardRule<T> for SumBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        if !self.input.requires_grad() {
            return Ok(vec![None]);
        }
        let g = scalar_grad(grad_output, "sum")?;
        Ok(vec![Some(vec![g; self.input.numel()])])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.input]
    }
}

/// Extracts the single gradient value flowing into a reduction.
pub(crate) fn scalar_grad<T: NumericElement>(grad_output: &[T], op_name: &str) -> Result<T, MinigradError> {
    match grad_output {
        [g] => Ok(*g),
        _ => Err(MinigradError::InternalError(format!(
            "{} backward expected a single gradient value, got {}",
            op_name,
            grad_output.len()
        ))),
    }
}

// --- Forward Operation ---

/// Sums all elements into a 0-dimensional tensor. The sum of an empty tensor is 0.
pub fn sum_op<T: NumericElement>(input: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    let total = input.read_data().data.iter().fold(T::zero(), |acc, &x| acc + x);
    let output = Tensor::from_parts(vec![total], vec![]);
    let input = input.clone();
    Ok(finish_op(output, input.requires_grad(), || {
        BackwardOp::Sum(SumBackward { input })
    }))
}

// --- Tests ---
#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
