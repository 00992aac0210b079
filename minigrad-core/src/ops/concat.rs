use log::trace;

use crate::autograd::{BackwardOp, BackwardRule, InputGrads};
use crate::error::MinigradError;
use crate::ops::finish_op;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Backward operation for [`concatenate_op`].
///
/// Splits the upstream gradient along `axis` back into the two input chunks.
pub struct ConcatBackward<T> {
    pub(crate) a: Tensor<T>,
    pub(crate) b: Tensor<T>,
    pub(crate) axis: usize,
}

/// Row-major block sizes for concatenating `a_shape` and `b_shape` along `axis`:
/// the number of outer blocks and the contiguous run each operand contributes
/// per block.
fn block_layout(a_shape: &[usize], b_shape: &[usize], axis: usize) -> (usize, usize, usize) {
    let outer: usize = a_shape[..axis].iter().product();
    let a_run: usize = a_shape[axis..].iter().product();
    let b_run: usize = b_shape[axis..].iter().product();
    (outer, a_run, b_run)
}

impl<T: NumericElement> BackwardRule<T> for ConcatBackward<T> {
    fn backward(&self, grad_output: &[T]) -> Result<InputGrads<T>, MinigradError> {
        let (outer, a_run, b_run) = block_layout(&self.a.shape(), &self.b.shape(), self.axis);
        let expected = outer * (a_run + b_run);
        if grad_output.len() != expected {
            return Err(MinigradError::InternalError(format!(
                "concatenate backward expected {} gradient values, got {}",
                expected,
                grad_output.len()
            )));
        }

        let mut grad_a = Vec::with_capacity(outer * a_run);
        let mut grad_b = Vec::with_capacity(outer * b_run);
        // An empty operand has a zero-length run; chunking by 0 is not allowed.
        let block = (a_run + b_run).max(1);
        for chunk in grad_output.chunks(block) {
            let (left, right) = chunk.split_at(a_run);
            grad_a.extend_from_slice(left);
            grad_b.extend_from_slice(right);
        }

        Ok(vec![
            self.a.requires_grad().then_some(grad_a),
            self.b.requires_grad().then_some(grad_b),
        ])
    }

    fn inputs(&self) -> Vec<&Tensor<T>> {
        vec![&self.a, &self.b]
    }
}

/// Joins two tensors along an existing axis.
///
/// Both tensors must have the same rank and agree on every dimension except
/// `axis`.
///
/// # Errors
/// * `InvalidAxis` if the ranks differ or `axis` is out of range.
/// * `ShapeMismatch` if a non-concatenated dimension differs.
pub fn concatenate_op<T: NumericElement>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    axis: usize,
) -> Result<Tensor<T>, MinigradError> {
    let a_shape = a.shape();
    let b_shape = b.shape();
    let rank = a_shape.len();

    if b_shape.len() != rank {
        return Err(MinigradError::ShapeMismatch {
            expected: a_shape,
            actual: b_shape,
            operation: "concatenate".to_string(),
        });
    }
    if axis >= rank {
        return Err(MinigradError::InvalidAxis { axis, rank });
    }
    let compatible = a_shape
        .iter()
        .zip(&b_shape)
        .enumerate()
        .all(|(d, (x, y))| d == axis || x == y);
    if !compatible {
        return Err(MinigradError::ShapeMismatch {
            expected: a_shape,
            actual: b_shape,
            operation: "concatenate".to_string(),
        });
    }

    let mut output_shape = a_shape.clone();
    output_shape[axis] += b_shape[axis];
    trace!(
        "concatenate {:?} and {:?} along axis {} -> {:?}",
        a_shape,
        b_shape,
        axis,
        output_shape
    );

    let (outer, a_run, b_run) = block_layout(&a_shape, &b_shape, axis);
    let output_data = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        let mut data = Vec::with_capacity(outer * (a_run + b_run));
        for block in 0..outer {
            data.extend_from_slice(&a_guard.data[block * a_run..(block + 1) * a_run]);
            data.extend_from_slice(&b_guard.data[block * b_run..(block + 1) * b_run]);
        }
        data
    };

    let output = Tensor::from_parts(output_data, output_shape);
    let requires_grad = a.requires_grad() || b.requires_grad();
    let (a, b) = (a.clone(), b.clone());
    Ok(finish_op(output, requires_grad, || {
        BackwardOp::Concatenate(ConcatBackward { a, b, axis })
    }))
}

#[cfg(test)]
#[path = "concat_test.rs"]
mod tests;
