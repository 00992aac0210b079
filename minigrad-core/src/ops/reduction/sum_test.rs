use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_sum_forward_is_scalar() {
    let t = Tensor::new(vec![1.0_f64, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let s = sum_op(&t).unwrap();
    assert_eq!(s.shape(), Vec::<usize>::new());
    assert_relative_eq!(s.item().unwrap(), 10.0);
}

#[test]
fn test_sum_empty_is_zero() {
    let t = Tensor::<f64>::new(vec![], vec![0]).unwrap();
    assert_relative_eq!(sum_op(&t).unwrap().item().unwrap(), 0.0);
}

#[test]
fn test_sum_backward_broadcasts_ones() {
    let t = Tensor::leaf(vec![1.0_f64, -2.0, 3.0], vec![3], true).unwrap();
    let s = sum_op(&t).unwrap();
    s.backward(None).unwrap();
    assert_eq!(t.grad(), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_sum_check_grad() {
    let t = Tensor::leaf(vec![0.1_f64, 0.2, -0.3, 4.0, 5.0, -6.0], vec![2, 3], true).unwrap();
    let func = |inputs: &[Tensor<f64>]| sum_op(&inputs[0]);
    check_grad(func, &[t], &[2.0], &GradCheckConfig::default()).unwrap();
}

#[test]
fn test_scalar_grad_rejects_vectors() {
    let err = scalar_grad(&[1.0_f64, 2.0], "sum").unwrap_err();
    assert!(matches!(err, MinigradError::InternalError(_)));
}
