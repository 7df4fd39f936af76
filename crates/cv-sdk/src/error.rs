use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("store error: {0}")]
    Store(#[from] cv_store::StoreError),
}

pub type SdkResult<T> = Result<T, SdkError>;
