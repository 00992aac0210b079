use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::ops::{apply_binary_op, reduce_to_numel};
use crate::tensor::Tensor;

/// Backward context for subtraction.
pub struct SubBackward<T> {
    pub(crate) a: Tensor<T>,
    pub(crate) b: Tensor<T>,
}

impl<T: NumericElement> BackwardRule<T> for SubBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        let grad_a = self
            .a
            .requires_grad()
            .then(|| reduce_to_numel(grad_output.to_vec(), self.a.numel()));
        let grad_b = self.b.requires_grad().then(|| {
            let negated: Vec<T> = grad_output.iter().map(|&g| -g).collect();
            reduce_to_numel(negated, self.b.numel())
        });
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.a, &self.b]
    }
}

/// Element-wise `a - b`.
pub fn sub_op<T: NumericElement>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    apply_binary_op(
        a,
        b,
        |x, y| x - y,
        |a, b| BackwardOp::Sub(SubBackward { a, b }),
        "sub",
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
