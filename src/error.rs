use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised by range-index and lookup misuse from inside the crate.
    ///
    /// Public entry points resolve index windows before querying, so hitting
    /// this from host code means an internal contract was broken.
    #[error("index window [{left}, {right}] out of range for length {len}")]
    IndexOutOfRange {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}
