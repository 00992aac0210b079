use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::apply_unary_op;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Backward context for raising to a constant power.
pub struct PowBackward<T> {
    pub(crate) input: Tensor<T>,
    pub(crate) exponent: T,
}

impl<T: NumericElement> BackwardRule<T> for PowBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        if !self.input.requires_grad() {
            return Ok(vec![None]);
        }
        // d/dx x^e = e * x^(e-1)
        let exponent = self.exponent;
        let input_guard = self.input.read_data();
        let grad = grad_output
            .iter()
            .zip(&input_guard.data)
            .map(|(&g, &x)| g * exponent * x.powf(exponent - T::one()))
            .collect();
        Ok(vec![Some(grad)])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.input]
    }
}

/// Element-wise `a ^ exponent` for a constant exponent.
pub fn pow_op<T: NumericElement>(a: &Tensor<T>, exponent: T) -> Result<Tensor<T>, MinigradError> {
    apply_unary_op(
        a,
        |x| x.powf(exponent),
        |input, _| BackwardOp::Pow(PowBackward { input, exponent }),
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
