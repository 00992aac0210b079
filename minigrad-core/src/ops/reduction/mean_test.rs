use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_mean_forward() {
    let t = Tensor::from_vec(vec![1.0_f64, 2.0, 3.0, 6.0]);
    assert_relative_eq!(mean_op(&t).unwrap().item().unwrap(), 3.0);
}

#[test]
fn test_mean_empty_errors() {
    let t = Tensor::<f64>::from_vec(vec![]);
    let err = mean_op(&t).unwrap_err();
    assert_eq!(
        err,
        MinigradError::EmptyTensor {
            operation: "mean".to_string()
        }
    );
}

#[test]
fn test_mean_backward() {
    let t = Tensor::leaf(vec![1.0_f64, 2.0, 3.0, 4.0], vec![4], true).unwrap();
    let m = mean_op(&t).unwrap();
    m.backward(None).unwrap();
    assert_eq!(t.grad(), vec![0.25; 4]);
}

#[test]
fn test_mean_check_grad() {
    let t = Tensor::leaf(vec![1.5_f64, -2.0, 0.25], vec![3], true).unwrap();
    let func = |inputs: &[Tensor<f64>]| mean_op(&inputs[0]);
    check_grad(func, &[t], &[1.0], &GradCheckConfig::default()).unwrap();
}
