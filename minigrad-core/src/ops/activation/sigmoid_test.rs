use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_sigmoid_forward() {
    let x = Tensor::from_vec(vec![0.0_f64, 2.0, -2.0]);
    let y = sigmoid_op(&x).unwrap().data();
    assert_relative_eq!(y[0], 0.5);
    assert_relative_eq!(y[1], 1.0 / (1.0 + (-2.0_f64).exp()), epsilon = 1e-12);
    assert_relative_eq!(y[1] + y[2], 1.0, epsilon = 1e-12);
}

#[test]
fn test_sigmoid_extreme_inputs_stay_finite() {
    let x = Tensor::from_vec(vec![-1000.0_f64, 1000.0]);
    let y = sigmoid_op(&x).unwrap().data();
    assert_relative_eq!(y[0], 0.0);
    assert_relative_eq!(y[1], 1.0);
}

#[test]
fn test_sigmoid_backward_at_zero() {
    let x = Tensor::scalar(0.0_f64).with_grad();
    let y = sigmoid_op(&x).unwrap();
    y.backward(None).unwrap();
    assert_relative_eq!(x.grad_item().unwrap(), 0.25);
}

#[test]
fn test_sigmoid_check_grad() {
    let x = Tensor::leaf(vec![-3.0_f64, -0.1, 0.0, 0.7, 4.0], vec![5], true).unwrap();
    let func = |inputs: &[Tensor<f64>]| sigmoid_op(&inputs[0]);
    check_grad(func, &[x], &[1.0; 5], &GradCheckConfig::default()).unwrap();
}
