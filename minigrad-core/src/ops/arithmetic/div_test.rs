use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Tensor::from_vec(vec![6.0_f64, 1.0]);
    let b = Tensor::from_vec(vec![3.0_f64, 4.0]);
    assert_eq!(div_op(&a, &b).unwrap().data(), vec![2.0, 0.25]);
}

#[test]
fn test_div_by_zero_is_ieee() {
    let a = Tensor::scalar(1.0_f64);
    let b = Tensor::scalar(0.0_f64);
    assert!(div_op(&a, &b).unwrap().item().unwrap().is_infinite());
}

#[test]
fn test_div_backward() {
    let a = Tensor::scalar(6.0_f64).with_grad();
    let b = Tensor::scalar(3.0_f64).with_grad();
    let out = div_op(&a, &b).unwrap();
    out.backward(None).unwrap();
    assert_relative_eq!(a.grad_item().unwrap(), 1.0 / 3.0);
    assert_relative_eq!(b.grad_item().unwrap(), -6.0 / 9.0);
}

#[test]
fn test_div_check_grad() {
    let a = Tensor::leaf(vec![1.0_f64, -2.0, 0.5], vec![3], true).unwrap();
    let b = Tensor::leaf(vec![2.0_f64, 0.5, -4.0], vec![3], true).unwrap();
    let func = |inputs: &[Tensor<f64>]| div_op(&inputs[0], &inputs[1]);
    check_grad(func, &[a, b], &[1.0, 1.0, 1.0], &GradCheckConfig::default()).unwrap();
}

#[test]
fn test_div_check_grad_broadcast_denominator() {
    let a = Tensor::leaf(vec![1.0_f64, 2.0, 3.0], vec![3], true).unwrap();
    let b = Tensor::scalar(1.5_f64).with_grad();
    let func = |inputs: &[Tensor<f64>]| div_op(&inputs[0], &inputs[1]);
    check_grad(func, &[a, b], &[1.0, -1.0, 0.5], &GradCheckConfig::default()).unwrap();
}
