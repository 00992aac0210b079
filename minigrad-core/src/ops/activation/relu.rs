use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::apply_unary_op;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Backward pass structure for the ReLU operation.
///
/// The gradient is passed through where the input was strictly positive and
/// zeroed elsewhere, including at exactly zero.
pub struct ReluBackward<T> {
    pub(crate) input: Tensor<T>,
}

impl<T: NumericElement> BackwardRule<T> for ReluBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        if !self.input.requires_grad() {
            return Ok(vec![None]);
        }
        let input_guard = self.input.read_data();
        let grad = grad_output
            .iter()
            .zip(&input_guard.data)
            .map(|(&g, &x)| if x > T::zero() { g } else { T::zero() })
            .collect();
        Ok(vec![Some(grad)])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.input]
    }
}

/// Applies the Rectified Linear Unit function element-wise: `max(0, x)`.
pub fn relu_op<T: NumericElement>(input: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    apply_unary_op(
        input,
        |x| if x > T::zero() { x } else { T::zero() },
        |input, _| BackwardOp::Relu(ReluBackward { input }),
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
