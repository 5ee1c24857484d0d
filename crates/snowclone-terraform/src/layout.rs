//! Stack directory resolution
//!
//! The terraform configurations ship alongside the installed binary:
//! `<exe-dir>/terraform`, with the admin stack in `terraform/admin` and
//! the project stack at the top level. `SNOWCLONE_TERRAFORM_DIR`
//! overrides the root for development and tests.

use crate::error::{Result, TerraformError};
use std::path::{Path, PathBuf};

/// Environment variable overriding the stack root
pub const TERRAFORM_DIR_ENV: &str = "SNOWCLONE_TERRAFORM_DIR";

/// Location of the bundled terraform stacks
#[derive(Debug, Clone)]
pub struct StackLayout {
    root: PathBuf,
}

impl StackLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve the stack root: env override first, then next to the executable
    pub fn discover() -> Result<Self> {
        if let Ok(dir) = std::env::var(TERRAFORM_DIR_ENV) {
            return Ok(Self::new(dir));
        }

        let exe = std::env::current_exe()?;
        let exe_dir = exe
            .parent()
            .ok_or_else(|| TerraformError::StackDirNotFound(exe.clone()))?;
        Ok(Self::new(exe_dir.join("terraform")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Admin stack directory (shared infrastructure)
    pub fn admin_dir(&self) -> Result<PathBuf> {
        Self::existing(self.root.join("admin"))
    }

    /// Project stack directory
    pub fn project_dir(&self) -> Result<PathBuf> {
        Self::existing(self.root.clone())
    }

    fn existing(dir: PathBuf) -> Result<PathBuf> {
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(TerraformError::StackDirNotFound(dir))
        }
    }
}
