use crate::utils::error::{DevcracksError, Result};
use std::process::Stdio;
use tokio::process::Command;

fn describe(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `program args..` with inherited stdio; a non-zero exit is an error.
pub async fn run_inherited(program: &str, args: &[&str]) -> Result<()> {
    let command = describe(program, args);
    tracing::debug!("Running: {}", command);

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| DevcracksError::SpawnFailed {
            program: program.to_string(),
            source,
        })?;

    tracing::debug!("`{}` exited with {}", command, status);

    if !status.success() {
        return Err(DevcracksError::DelegateFailed { command, status });
    }
    Ok(())
}

/// Runs `program args..` and returns its stdout; stderr passes through.
pub async fn capture(program: &str, args: &[&str]) -> Result<String> {
    let command = describe(program, args);
    tracing::debug!("Capturing: {}", command);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .await
        .map_err(|source| DevcracksError::SpawnFailed {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(DevcracksError::DelegateFailed {
            command,
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
