use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::ops::{apply_binary_op, broadcast_index, reduce_to_numel};
use crate::tensor::Tensor;

/// Backward context for division.
pub struct DivBackward<T> {
    pub(crate) a: Tensor<T>,
    pub(crate) b: Tensor<T>,
}

impl<T: NumericElement> BackwardRule<T> for DivBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        let a_guard = self.a.read_data();
        let b_guard = self.b.read_data();
        let (a_len, b_len) = (a_guard.data.len(), b_guard.data.len());

        // grad_a = grad_output / b
        let grad_a = a_guard.requires_grad.then(|| {
            let grad: Vec<T> = grad_output
                .iter()
                .enumerate()
                .map(|(i, &g)| g / b_guard.data[broadcast_index(b_len, i)])
                .collect();
            reduce_to_numel(grad, a_len)
        });
        // grad_b = -grad_output * a / b^2
        let grad_b = b_guard.requires_grad.then(|| {
            let grad: Vec<T> = grad_output
                .iter()
                .enumerate()
                .map(|(i, &g)| {
                    let a = a_guard.data[broadcast_index(a_len, i)];
                    let b = b_guard.data[broadcast_index(b_len, i)];
                    -g * a / (b * b)
                })
                .collect();
            reduce_to_numel(grad, b_len)
        });
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.a, &self.b]
    }
}

/// Element-wise `a / b`. Division by zero follows IEEE semantics.
pub fn div_op<T: NumericElement>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    apply_binary_op(
        a,
        b,
        |x, y| x / y,
        |a, b| BackwardOp::Div(DivBackward { a, b }),
        "div",
    )
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
