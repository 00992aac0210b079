use thiserror::Error;

/// Custom error type for the minigrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MinigradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Backward called on non-scalar tensor of shape {shape:?} without explicit seed gradient.")]
    BackwardWithoutSeed { shape: Vec<usize> },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CyclicReference,

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Expected a single-element tensor, got shape {shape:?}")]
    NotScalar { shape: Vec<usize> },

    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    #[error("Operation {operation} is undefined for an empty tensor")]
    EmptyTensor { operation: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}
