use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid viewport: width={width}, height={height}, content area must be non-empty")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("indicator needs at least {required} ticks, axis has {available}")]
    InsufficientTicks { required: usize, available: usize },

    #[error("tick value at index {index} is not finite")]
    NonFiniteTick { index: usize },

    #[error("indicator anchors at ticks {first} and {second} share the same value")]
    DegenerateAnchors { first: usize, second: usize },

    #[error("value-to-pixel matrix is not invertible")]
    NonInvertibleTransform,

    #[error("backend failure: {0}")]
    Backend(String),
}
