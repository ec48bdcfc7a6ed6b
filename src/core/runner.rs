//! External command execution.
//!
//! Every git and rad invocation goes through [`CommandRunner`] so the
//! pipelines can be exercised without either binary installed.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::AppError;

/// Captured result of one external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for CommandOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Runs a program to completion in a working directory.
pub trait CommandRunner {
    /// Run `program` with `args` inside `cwd`, blocking until it exits.
    ///
    /// Returns `Err` only when the process could not be started; a non-zero
    /// exit is reported through [`CommandOutput::success`].
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput, AppError>;

    /// Like [`CommandRunner::run`], but a non-zero exit becomes
    /// [`AppError::Process`].
    fn run_checked(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput, AppError> {
        let output = self.run(program, args, cwd)?;

        if !output.stdout.trim().is_empty() {
            log::debug!("{}: {}", command_line(program, args), output.stdout.trim());
        }

        if !output.success {
            return Err(AppError::Process {
                command: command_line(program, args),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        if !output.stderr.trim().is_empty() {
            log::debug!("{}: {}", command_line(program, args), output.stderr.trim());
        }

        Ok(output)
    }
}

/// Render a program and its arguments the way a shell user would type them.
pub fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() {
            line.push_str("\"\"");
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// Runs commands on the host with `std::process::Command`.
///
/// Stdin is attached to null so an interactive prompt fails fast instead of
/// hanging the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput, AppError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::Spawn {
                command: command_line(program, args),
                source: e,
            })?;

        Ok(output.into())
    }
}
