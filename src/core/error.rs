//! Error types for optlab

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptLabError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type OptLabResult<T> = Result<T, OptLabError>;

impl OptLabError {
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}
