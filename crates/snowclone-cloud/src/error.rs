//! Cloud provider error types

use thiserror::Error;

/// Cloud provider errors
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Bucket creation failed: {0}")]
    BucketCreationFailed(String),

    #[error("No endpoint registered for project: {0}")]
    EndpointNotFound(String),

    #[error("Malformed registry entry for project: {0}")]
    MalformedEntry(String),

    #[error("API error: {0}")]
    ApiError(String),
}

pub type Result<T> = std::result::Result<T, CloudError>;
