//! Terraform invoker error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerraformError {
    #[error(
        "terraform not found. Please install: https://developer.hashicorp.com/terraform/install"
    )]
    TerraformNotFound,

    #[error("terraform {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Stack directory not found: {}", .0.display())]
    StackDirNotFound(PathBuf),

    #[error("Missing output '{0}' in terraform outputs")]
    MissingOutput(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TerraformError>;
