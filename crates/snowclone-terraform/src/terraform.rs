//! terraform CLI wrapper
//!
//! Wraps the terraform subcommands Snowclone relies on: backend
//! initialization, auto-approved apply, and the structured output dump.

use crate::backend::BackendConfig;
use crate::error::{Result, TerraformError};
use crate::runner::{ProcessRunner, SystemRunner};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// terraform CLI wrapper bound to one stack directory
pub struct Terraform {
    stack_dir: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl Terraform {
    pub fn new(stack_dir: impl AsRef<Path>) -> Self {
        Self::with_runner(stack_dir, Arc::new(SystemRunner))
    }

    /// Create a wrapper with a custom process runner
    pub fn with_runner(stack_dir: impl AsRef<Path>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            stack_dir: stack_dir.as_ref().to_path_buf(),
            runner,
        }
    }

    /// Run a terraform subcommand and return stdout
    async fn run_command(&self, args: Vec<String>) -> Result<String> {
        tracing::debug!(
            "Running: terraform {} (in {})",
            args.join(" "),
            self.stack_dir.display()
        );

        let output = self
            .runner
            .run("terraform", &args, &self.stack_dir)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TerraformError::TerraformNotFound,
                _ => TerraformError::Io(e),
            })?;

        if !output.success() {
            return Err(TerraformError::CommandFailed {
                command: args.first().cloned().unwrap_or_default(),
                stderr: output.stderr,
            });
        }

        Ok(output.stdout)
    }

    fn init_args(flag: &str, backend: &BackendConfig) -> Vec<String> {
        let mut args = vec!["init".to_string(), flag.to_string()];
        args.extend(backend.to_args());
        args
    }

    /// `terraform init -reconfigure` against a fresh backend
    pub async fn init_reconfigure(&self, backend: &BackendConfig) -> Result<()> {
        self.run_command(Self::init_args("-reconfigure", backend))
            .await?;
        Ok(())
    }

    /// `terraform init -migrate-state`, moving any local state into the backend
    pub async fn init_migrate_state(&self, backend: &BackendConfig) -> Result<()> {
        self.run_command(Self::init_args("-migrate-state", backend))
            .await?;
        Ok(())
    }

    /// `terraform apply -auto-approve` (no interactive confirmation)
    pub async fn apply(&self) -> Result<()> {
        self.run_command(vec!["apply".to_string(), "-auto-approve".to_string()])
            .await?;
        Ok(())
    }

    /// `terraform output -json`, parsed into [`StackOutputs`]
    pub async fn outputs(&self) -> Result<StackOutputs> {
        let stdout = self
            .run_command(vec!["output".to_string(), "-json".to_string()])
            .await?;
        Ok(serde_json::from_str(&stdout)?)
    }
}

/// Parsed `terraform output -json` document
#[derive(Debug, Clone, Deserialize)]
pub struct StackOutputs {
    pub app_url: Option<OutputValue>,
}

impl StackOutputs {
    /// The deployed application endpoint (`app_url.value`)
    pub fn endpoint(&self) -> Result<&str> {
        self.app_url
            .as_ref()
            .map(|o| o.value.as_str())
            .ok_or_else(|| TerraformError::MissingOutput("app_url".to_string()))
    }
}

/// A single terraform output value
#[derive(Debug, Clone, Deserialize)]
pub struct OutputValue {
    pub value: String,
}
