use thiserror::Error;

/// Top-level error type for room estimation.
#[derive(Debug, Error)]
pub enum RoomboxError {
    #[error(transparent)]
    Segmentation(#[from] SegmentationError),

    #[error(transparent)]
    Estimation(#[from] EstimationError),

    #[error(transparent)]
    BoundingBox(#[from] BoxError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors from fitting and partitioning the distance signal.
#[derive(Debug, Error)]
pub enum SegmentationError {
    #[error("invalid range [{start}, {end}) for signal of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("no partition of {n} samples into {k} segments of at least 3 samples")]
    PartitionInfeasible { n: usize, k: usize },

    #[error("empty signal")]
    EmptyInput,

    #[error("degenerate fit: {0}")]
    Degenerate(String),
}

/// Errors from the height estimator.
#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("no points to estimate from")]
    EmptyInput,

    #[error("invalid estimator parameters: {0}")]
    InvalidParameters(String),
}

/// Errors from bounding box construction.
#[derive(Debug, Error)]
pub enum BoxError {
    #[error("expected 4 corner indices, got {len}")]
    InvalidPathLength { len: usize },

    #[error("corner index {index} is out of bounds for {len} points")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Errors from reading point files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 3 coordinates, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: `{value}` is not a number")]
    NotNumeric { line: usize, value: String },

    #[error("no points in input")]
    Empty,
}

/// Convenience type alias for results using [`RoomboxError`].
pub type Result<T> = std::result::Result<T, RoomboxError>;
