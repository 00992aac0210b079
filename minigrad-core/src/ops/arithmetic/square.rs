use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::apply_unary_op;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Backward context for squaring: `grad * 2 * x`.
pub struct SquareBackward<T> {
    pub(crate) input: Tensor<T>,
}

impl<T: NumericElement> BackwardRule<T> for SquareBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        if !self.input.requires_grad() {
            return Ok(vec![None]);
        }
        let two = T::one() + T::one();
        let input_guard = self.input.read_data();
        let grad = grad_output
            .iter()
            .zip(&input_guard.data)
            .map(|(&g, &x)| g * two * x)
            .collect();
        Ok(vec![Some(grad)])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.input]
    }
}

/// Element-wise `a * a`.
pub fn square_op<T: NumericElement>(a: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    apply_unary_op(a, |x| x * x, |input, _| BackwardOp::Square(SquareBackward { input }))
}

#[cfg(test)]
#[path = "square_test.rs"]
mod tests;
