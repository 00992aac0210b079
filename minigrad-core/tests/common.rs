use minigrad_core::Tensor;

// Shared by several integration test crates; not every crate uses every helper.

/// 0-dimensional leaf that requires grad.
#[allow(dead_code)]
pub fn grad_scalar(value: f64) -> Tensor<f64> {
    Tensor::scalar(value).with_grad()
}

/// 1-D leaf with `requires_grad = true`.
#[allow(dead_code)]
pub fn grad_vector(values: Vec<f64>) -> Tensor<f64> {
    Tensor::from_vec(values).with_grad()
}

/// Evenly spaced sample points in `[start, end]`.
#[allow(dead_code)]
pub fn sweep(start: f64, end: f64, steps: usize) -> Vec<f64> {
    (0..steps)
        .map(|i| start + (end - start) * i as f64 / (steps - 1) as f64)
        .collect()
}
