use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::ops::{apply_binary_op, broadcast_index, reduce_to_numel};
use crate::tensor::Tensor;

// --- Backward Operation Structure ---

/// Backward context for multiplication.
///
/// Keeps handles to both operands: the product rule needs their values, not
/// the output.
pub struct MulBackward<T> {
    pub(crate) a: Tensor<T>,
    pub(crate) b: Tensor<T>,
}

/// `grad_output * other`, reduced to the shape of the operand receiving it.
fn scaled_by<T: NumericElement>(grad_output: &[T], other: &Tensor<T>, target_numel: usize) -> Vec<T> {
    let other_guard = other.read_data();
    let other_len = other_guard.data.len();
    let grad: Vec<T> = grad_output
        .iter()
        .enumerate()
        .map(|(i, &g)| g * other_guard.data[broadcast_index(other_len, i)])
        .collect();
    reduce_to_numel(grad, target_numel)
}

impl<T: NumericElement> BackwardRule<T> for MulBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        // grad_a = grad_output * b
        let grad_a = self
            .a
            .requires_grad()
            .then(|| scaled_by(grad_output, &self.b, self.a.numel()));
        // grad_b = grad_output * a
        let grad_b = self
            .b
            .requires_grad()
            .then(|| scaled_by(grad_output, &self.a, self.b.numel()));
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.a, &self.b]
    }
}

// --- Forward Operation ---

/// Element-wise `a * b`.
pub fn mul_op<T: NumericElement>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, MinigradError> {
    apply_binary_op(
        a,
        b,
        |x, y| x * y,
        |a, b| BackwardOp::Mul(MulBackward { a, b }),
        "mul",
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
