//! Process runner capability
//!
//! Narrow abstraction over child-process execution (command, arguments,
//! working directory → captured output), so the terraform wrapper can be
//! exercised with a fake in tests.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Captured output of a finished child process
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub status_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.status_code == 0
    }
}

/// Child-process execution abstraction
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run a program to completion and capture its output
    ///
    /// Blocks (asynchronously) until the child exits; no timeout or
    /// cancellation is applied.
    async fn run(&self, program: &str, args: &[String], cwd: &Path)
    -> std::io::Result<RunOutput>;
}

/// Runner backed by `tokio::process`
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> std::io::Result<RunOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd.current_dir(cwd);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().await?;

        Ok(RunOutput {
            status_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_runner_captures_stdout() {
        let runner = SystemRunner;
        let output = runner
            .run("echo", &["hello".to_string()], Path::new("."))
            .await
            .unwrap();

        assert!(output.success());
        assert!(output.stdout.contains("hello"));
    }

    #[tokio::test]
    async fn test_system_runner_missing_program() {
        let runner = SystemRunner;
        let result = runner
            .run("nonexistent-program-xyz", &[], Path::new("."))
            .await;

        assert!(matches!(
            result.map_err(|e| e.kind()),
            Err(std::io::ErrorKind::NotFound)
        ));
    }
}
