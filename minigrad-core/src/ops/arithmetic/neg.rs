use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::apply_unary_op;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Backward context for negation.
pub struct NegBackward<T> {
    pub(crate) input: Tensor<T>,
}

impl<T: NumericElement> BackwardRule<T> for NegBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        let grad = self
            .input
            .requires_grad()
            .then(|| grad_output.iter().map(|&g| -g).collect());
        Ok(vec![grad])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.input]
    }
}

/// Element-wise `-a`.
pub fn neg_op<T: NumericElement>(a: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    apply_unary_op(a, |x| -x, |input, _| BackwardOp::Neg(NegBackward { input }))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
