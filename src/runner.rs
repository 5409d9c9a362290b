use anyhow::{bail, Context, Result};
use std::process::Command;

/// Captured result of one `aws` invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Seam for every external `aws` CLI call, so the orchestration can be
/// exercised against a mock instead of a real CLI and credential store.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs `aws <args>` to completion and captures its output. A non-zero
    /// exit is reported through `CommandOutput::success`, not as an `Err`;
    /// `Err` means the CLI could not be invoked at all.
    fn run(&self, args: &[String]) -> Result<CommandOutput>;
}

/// Production runner: shells out to the `aws` binary on PATH.
pub struct AwsCliRunner;

impl CommandRunner for AwsCliRunner {
    fn run(&self, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new("aws")
            .args(args)
            .output()
            .context("Failed to invoke the aws CLI. Is it installed and on PATH?")?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs a call that must succeed; a non-zero exit surfaces the CLI's stderr
/// verbatim as a fatal error.
pub fn run_checked(runner: &dyn CommandRunner, args: &[String]) -> Result<String> {
    let output = runner.run(args)?;
    if !output.success {
        bail!(
            "aws {} failed: {}",
            args.first().map(String::as_str).unwrap_or(""),
            output.stderr.trim()
        );
    }
    Ok(output.stdout)
}

pub fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
