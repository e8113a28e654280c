//! Error types for graph operations

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised by graph operations
///
/// All of these are deterministic caller errors raised at the point of
/// violation; nothing here is transient or retryable.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{element} is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("unknown partition: {0}")]
    UnknownPartition(String),

    #[error("incompatible degree sequence: total in-degree {in_sum} != total out-degree {out_sum}")]
    IncompatibleDegreeSequence { in_sum: usize, out_sum: usize },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
