use minigrad_core::tensor::{full, ones, ones_like, randn_with_rng, zeros};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;

#[test]
fn created_tensors_are_constant_leaves() {
    let z = zeros::<f64>(&[2, 2]).unwrap();
    let o = ones::<f64>(&[2, 2]).unwrap();
    let f = full(&[3], -1.5_f64).unwrap();
    for t in [&z, &o, &f] {
        assert!(t.is_leaf());
        assert!(!t.requires_grad());
    }
    assert_eq!(o.data(), vec![1.0; 4]);
    assert_eq!(f.data(), vec![-1.5; 3]);
    assert_eq!(ones_like(&f).unwrap().shape(), vec![3]);
}

#[test]
fn random_leaf_can_be_trained() {
    let w = randn_with_rng::<f64, _>(&[4], &mut StdRng::seed_from_u64(3))
        .unwrap()
        .with_grad();
    let target = zeros::<f64>(&[4]).unwrap();
    let loss = w.sub(&target).unwrap().square().unwrap().mean().unwrap();
    loss.backward(None).unwrap();

    let expected: Vec<f64> = w.data().iter().map(|v| v / 2.0).collect();
    for (g, e) in w.grad().iter().zip(&expected) {
        approx::assert_relative_eq!(*g, *e, epsilon = 1e-12);
    }
}

#[test]
fn created_tensor_combines_with_scalar() {
    let x = common::grad_scalar(2.0);
    let v = ones::<f64>(&[3]).unwrap();
    let y = v.mul(&x).unwrap().sum().unwrap();
    y.backward(None).unwrap();
    assert_eq!(x.grad_item().unwrap(), 3.0);
    assert_eq!(y.item().unwrap(), 6.0);
}
