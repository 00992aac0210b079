use approx::relative_eq;
use log::trace;
use thiserror::Error;

use crate::autograd::grad_mode::no_grad;
use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input tensor at index {input_index}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MinigradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MinigradError),
    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(MinigradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },
    #[error("Gradient check input tensor must be a leaf node (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Output gradient has {actual} elements, function output has {expected}")]
    OutputGradShape { expected: usize, actual: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
}

impl From<MinigradError> for GradCheckError {
    fn from(err: MinigradError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Central-difference step.
    pub epsilon: f64,
    /// Absolute tolerance between analytical and numerical gradients.
    pub abs_tolerance: f64,
    /// Relative tolerance, applied when the absolute one is exceeded.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// The scalar objective is `sum(func(inputs) * output_grad)`, so the analytical
/// side is `func(inputs).backward(Some(output_grad))`. Each element of every
/// input that requires grad is perturbed by `±epsilon`; perturbed evaluations
/// run under `no_grad`.
///
/// Inputs must be leaves. Their gradients are reset before the check and hold
/// the analytical gradients afterwards.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[Tensor<T>],
    output_grad: &[T],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    T: NumericElement,
    F: Fn(&[Tensor<T>]) -> Result<Tensor<T>, MinigradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    // --- 1. Analytical gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    if output.numel() != output_grad.len() {
        return Err(GradCheckError::OutputGradShape {
            expected: output.numel(),
            actual: output_grad.len(),
        });
    }
    if inputs.iter().any(|t| t.requires_grad()) && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    output
        .backward(Some(output_grad.to_vec()))
        .map_err(GradCheckError::BackwardPassError)?;

    let output_grad_f64: Vec<f64> = output_grad.iter().map(|&g| g.as_f64()).collect();

    // --- 2. Numerical gradients, element by element ---
    for (i, original_input) in inputs.iter().enumerate() {
        if !original_input.requires_grad() {
            continue;
        }
        let analytical_grad_data: Vec<f64> = original_input.grad().into_iter().map(|g| g.as_f64()).collect();
        let original_data: Vec<f64> = original_input.data().into_iter().map(|v| v.as_f64()).collect();
        let shape = original_input.shape();

        for elem_idx in 0..original_data.len() {
            let loss_at = |delta: f64| -> Result<f64, GradCheckError> {
                let mut perturbed = original_data.clone();
                perturbed[elem_idx] += delta;
                let perturbed: Vec<T> = perturbed.into_iter().map(T::from_f64).collect();
                let mut inputs_perturbed = inputs.to_vec();
                inputs_perturbed[i] = Tensor::new(perturbed, shape.clone())?;
                let out = no_grad(|| func(&inputs_perturbed)).map_err(GradCheckError::ForwardPassError)?;
                Ok(weighted_sum(&out, &output_grad_f64))
            };

            let loss_plus = loss_at(config.epsilon)?;
            let loss_minus = loss_at(-config.epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);
            let analytical_grad = analytical_grad_data[elem_idx];

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    value: analytical_grad,
                });
            }

            trace!(
                "check_grad: input {} element {}: analytical={} numerical={}",
                i,
                elem_idx,
                analytical_grad,
                numerical_grad
            );
            if !relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = config.abs_tolerance,
                max_relative = config.rel_tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    Ok(())
}

/// `sum(tensor * weights)` in f64.
fn weighted_sum<T: NumericElement>(tensor: &Tensor<T>, weights: &[f64]) -> f64 {
    tensor
        .data()
        .into_iter()
        .zip(weights)
        .map(|(v, w)| v.as_f64() * w)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::BackwardOp;
    use crate::ops::apply_unary_op;
    use crate::ops::arithmetic::neg::NegBackward;

    #[test]
    fn test_check_grad_accepts_correct_rule() {
        let x = Tensor::leaf(vec![0.5_f64, -1.5, 2.0], vec![3], true).unwrap();
        let func = |inputs: &[Tensor<f64>]| inputs[0].square();
        let result = check_grad(func, &[x], &[1.0, 1.0, 1.0], &GradCheckConfig::default());
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn test_check_grad_detects_wrong_rule() {
        // Forward computes 2x, but the recorded rule is that of negation.
        let x = Tensor::leaf(vec![1.0_f64], vec![1], true).unwrap();
        let func = |inputs: &[Tensor<f64>]| {
            apply_unary_op(
                &inputs[0],
                |v| 2.0 * v,
                |input, _| BackwardOp::Neg(NegBackward { input }),
            )
        };
        let result = check_grad(func, &[x], &[1.0], &GradCheckConfig::default());
        match result {
            Err(GradCheckError::GradientMismatch {
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                assert_eq!(analytical_grad, -1.0);
                assert!((numerical_grad - 2.0).abs() < 1e-6);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_rejects_non_leaf_input() {
        let x = Tensor::scalar(1.0_f64).with_grad();
        let y = x.square().unwrap();
        let func = |inputs: &[Tensor<f64>]| inputs[0].relu();
        let result = check_grad(func, &[y], &[1.0], &GradCheckConfig::default());
        assert_eq!(result, Err(GradCheckError::InputNotLeaf { input_index: 0 }));
    }

    #[test]
    fn test_check_grad_rejects_wrong_output_grad_len() {
        let x = Tensor::leaf(vec![1.0_f64, 2.0], vec![2], true).unwrap();
        let func = |inputs: &[Tensor<f64>]| inputs[0].tanh();
        let result = check_grad(func, &[x], &[1.0], &GradCheckConfig::default());
        assert_eq!(
            result,
            Err(GradCheckError::OutputGradShape {
                expected: 2,
                actual: 1
            })
        );
    }
}
