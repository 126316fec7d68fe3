use crate::config::Flag;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecstoreError {
    #[error("-{0} flag has to be specified")]
    MissingArgument(Flag),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Operation {0} not allowed!")]
    UnsupportedOperation(String),
}

pub type Result<T> = std::result::Result<T, RecstoreError>;
