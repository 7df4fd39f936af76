/// Errors from inventory sources.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested credential does not exist.
    #[error("credential not found: {0}")]
    NotFound(String),

    /// The credential exists but holds no certificate body.
    #[error("credential {0} has no certificate body")]
    MissingBody(String),

    /// Snapshot serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading a snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote system could not be reached or refused the request.
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for inventory source operations.
pub type StoreResult<T> = Result<T, StoreError>;
