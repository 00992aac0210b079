use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::apply_unary_op;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Backward context for tanh; keeps the output, `d/dx tanh(x) = 1 - t^2`.
pub struct TanhBackward<T> {
    pub(crate) input: Tensor<T>,
    pub(crate) output: Vec<T>,
}

impl<T: NumericElement> BackwardRule<T> for TanhBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        let grad = self.input.requires_grad().then(|| {
            grad_output
                .iter()
                .zip(&self.output)
                .map(|(&g, &t)| g * (T::one() - t * t))
                .collect()
        });
        Ok(vec![grad])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.input]
    }
}

/// Element-wise hyperbolic tangent.
pub fn tanh_op<T: NumericElement>(input: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    apply_unary_op(
        input,
        |x| x.tanh(),
        |input, output| {
            BackwardOp::Tanh(TanhBackward {
                input,
                output: output.to_vec(),
            })
        },
    )
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
