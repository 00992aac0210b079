use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_zeros_ones_full() {
    let z = zeros::<f64>(&[2, 3]).unwrap();
    assert_eq!(z.shape(), vec![2, 3]);
    assert!(z.data().iter().all(|&v| v == 0.0));
    assert!(!z.requires_grad());

    let o = ones::<f32>(&[4]).unwrap();
    assert_eq!(o.data(), vec![1.0_f32; 4]);

    let f = full(&[], 2.5_f64).unwrap();
    assert_eq!(f.item().unwrap(), 2.5);
}

#[test]
fn test_like_constructors_copy_shape() {
    let t = Tensor::new(vec![1.0_f64; 6], vec![3, 2]).unwrap();
    assert_eq!(zeros_like(&t).unwrap().shape(), vec![3, 2]);
    assert_eq!(ones_like(&t).unwrap().data(), vec![1.0; 6]);
}

#[test]
fn test_rand_in_unit_interval() {
    let t = rand::<f64>(&[100]).unwrap();
    assert_eq!(t.numel(), 100);
    assert!(t.data().iter().all(|&v| (0.0..1.0).contains(&v)));
}

#[test]
fn test_seeded_randn_is_reproducible() {
    let a = randn_with_rng::<f64, _>(&[8], &mut StdRng::seed_from_u64(7)).unwrap();
    let b = randn_with_rng::<f64, _>(&[8], &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.data(), b.data());

    let c = rand_with_rng::<f32, _>(&[8], &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(c.shape(), vec![8]);
}

#[test]
fn test_randn_sample_statistics() {
    let t = randn_with_rng::<f64, _>(&[10_000], &mut StdRng::seed_from_u64(42)).unwrap();
    let data = t.data();
    let mean = data.iter().sum::<f64>() / data.len() as f64;
    let var = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / data.len() as f64;
    assert!(mean.abs() < 0.05, "mean = {}", mean);
    assert!((var - 1.0).abs() < 0.1, "var = {}", var);
}
