use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};

#[test]
fn test_concatenate_axis0() {
    let a = Tensor::new(vec![1.0_f64, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let b = Tensor::new(vec![5.0_f64, 6.0], vec![1, 2]).unwrap();
    let out = concatenate_op(&a, &b, 0).unwrap();
    assert_eq!(out.shape(), vec![3, 2]);
    assert_eq!(out.data(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_concatenate_axis1() {
    let a = Tensor::new(vec![1.0_f64, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let b = Tensor::new(vec![5.0_f64, 6.0, 7.0, 8.0, 9.0, 10.0], vec![2, 3]).unwrap();
    let out = concatenate_op(&a, &b, 1).unwrap();
    assert_eq!(out.shape(), vec![2, 5]);
    assert_eq!(
        out.data(),
        vec![1.0, 2.0, 5.0, 6.0, 7.0, 3.0, 4.0, 8.0, 9.0, 10.0]
    );
}

#[test]
fn test_concatenate_backward_splits_along_axis1() {
    let a = Tensor::leaf(vec![1.0_f64, 2.0], vec![2, 1], true).unwrap();
    let b = Tensor::leaf(vec![3.0_f64, 4.0, 5.0, 6.0], vec![2, 2], true).unwrap();
    let out = concatenate_op(&a, &b, 1).unwrap();
    out.backward(Some(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
    assert_eq!(a.grad(), vec![1.0, 4.0]);
    assert_eq!(b.grad(), vec![2.0, 3.0, 5.0, 6.0]);
}

#[test]
fn test_concatenate_constant_operand() {
    let a = Tensor::leaf(vec![1.0_f64, 2.0], vec![2], true).unwrap();
    let b = Tensor::from_vec(vec![3.0_f64]);
    let out = concatenate_op(&a, &b, 0).unwrap();
    out.backward(Some(vec![7.0, 8.0, 9.0])).unwrap();
    assert_eq!(a.grad(), vec![7.0, 8.0]);
    assert_eq!(b.grad(), vec![0.0]);
}

#[test]
fn test_concatenate_invalid_axis() {
    let a = Tensor::from_vec(vec![1.0_f64]);
    let b = Tensor::from_vec(vec![2.0_f64]);
    let err = concatenate_op(&a, &b, 1).unwrap_err();
    assert_eq!(err, MinigradError::InvalidAxis { axis: 1, rank: 1 });
}

#[test]
fn test_concatenate_scalars_have_no_axis() {
    let a = Tensor::scalar(1.0_f64);
    let b = Tensor::scalar(2.0_f64);
    let err = concatenate_op(&a, &b, 0).unwrap_err();
    assert_eq!(err, MinigradError::InvalidAxis { axis: 0, rank: 0 });
}

#[test]
fn test_concatenate_shape_mismatch() {
    let a = Tensor::new(vec![1.0_f64, 2.0], vec![1, 2]).unwrap();
    let b = Tensor::new(vec![1.0_f64, 2.0, 3.0], vec![1, 3]).unwrap();
    let err = concatenate_op(&a, &b, 0).unwrap_err();
    assert!(matches!(err, MinigradError::ShapeMismatch { .. }));

    let c = Tensor::from_vec(vec![1.0_f64, 2.0]);
    assert!(matches!(
        concatenate_op(&a, &c, 0),
        Err(MinigradError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_concatenate_check_grad() {
    let a = Tensor::leaf(vec![0.1_f64, 0.2, 0.3, 0.4, 0.5, 0.6], vec![2, 3], true).unwrap();
    let b = Tensor::leaf(vec![-1.0_f64, -2.0], vec![2, 1], true).unwrap();
    let func = |inputs: &[Tensor<f64>]| concatenate_op(&inputs[0], &inputs[1], 1);
    let output_grad = [1.0, -1.0, 2.0, 0.5, 3.0, -2.0, 1.5, 4.0];
    check_grad(func, &[a, b], &output_grad, &GradCheckConfig::default()).unwrap();
}
