//! Snowclone Terraform Invoker
//!
//! Runs the external `terraform` binary as a child process: remote-state
//! backend initialization, auto-approved apply, and structured output
//! extraction. Process execution goes through the [`ProcessRunner`]
//! capability so orchestration can be tested without terraform installed.

pub mod backend;
pub mod error;
pub mod layout;
pub mod runner;
mod terraform;

// Re-exports
pub use backend::BackendConfig;
pub use error::{Result, TerraformError};
pub use layout::{StackLayout, TERRAFORM_DIR_ENV};
pub use runner::{ProcessRunner, RunOutput, SystemRunner};
pub use terraform::{OutputValue, StackOutputs, Terraform};
