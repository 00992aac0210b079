// examples/pow_backward_loop.rs
//!
//! Timing loop over tiny graphs: each iteration builds `x^3` from a fresh leaf
//! `x = 2`, runs backward, then does the same with `relu(x^2)`.
//!
//! Usage: `RUST_LOG=info cargo run --example pow_backward_loop -- [iterations]`
//! (default 100000).

use std::time::Instant;

use log::{info, warn};
use minigrad_core::{MinigradError, Tensor};

const DEFAULT_ITERATIONS: usize = 100_000;

fn iterations_from_args() -> usize {
    match std::env::args().nth(1) {
        None => DEFAULT_ITERATIONS,
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            warn!("Invalid iteration count {:?}, using {}", arg, DEFAULT_ITERATIONS);
            DEFAULT_ITERATIONS
        }),
    }
}

fn main() -> Result<(), MinigradError> {
    env_logger::init();
    let iterations = iterations_from_args();

    let start = Instant::now();
    let mut last = (0.0, 0.0);
    for _ in 0..iterations {
        let x = Tensor::scalar(2.0_f64).with_grad();
        let y = x.pow(3.0)?;
        y.backward(None)?;
        last = (y.item()?, x.grad_item()?);
    }
    info!(
        "pow: {} iterations in {:?}, y = {}, dy/dx = {}",
        iterations,
        start.elapsed(),
        last.0,
        last.1
    );

    let start = Instant::now();
    for _ in 0..iterations {
        let x = Tensor::scalar(4.0_f64).with_grad();
        let y = x.square()?.relu()?;
        y.backward(None)?;
        last = (y.item()?, x.grad_item()?);
    }
    info!(
        "relu(square): {} iterations in {:?}, y = {}, dy/dx = {}",
        iterations,
        start.elapsed(),
        last.0,
        last.1
    );

    println!("y = {}, dy/dx = {}", last.0, last.1);
    Ok(())
}
