use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::apply_unary_op;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Backward context for the logistic sigmoid.
///
/// Stores the forward output `s`, since `d/dx sigmoid(x) = s * (1 - s)`.
pub struct SigmoidBackward<T> {
    pub(crate) input: Tensor<T>,
    pub(crate) output: Vec<T>,
}

impl<T: NumericElement> BackwardRule<T> for SigmoidBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        let grad = self.input.requires_grad().then(|| {
            grad_output
                .iter()
                .zip(&self.output)
                .map(|(&g, &s)| g * s * (T::one() - s))
                .collect()
        });
        Ok(vec![grad])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.input]
    }
}

/// Numerically stable `1 / (1 + e^-x)`.
pub(crate) fn sigmoid_scalar<T: NumericElement>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    }
}

/// Element-wise logistic sigmoid.
pub fn sigmoid_op<T: NumericElement>(input: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    apply_unary_op(input, sigmoid_scalar, |input, output| {
        BackwardOp::Sigmoid(SigmoidBackward {
            input,
            output: output.to_vec(),
        })
    })
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
