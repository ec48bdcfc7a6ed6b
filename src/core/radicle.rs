use std::fs;
use std::path::Path;

use crate::core::runner::{command_line, CommandRunner};
use crate::error::AppError;

/// Subdirectory whose presence marks a repository as already initialized.
///
/// `rad init` keeps the project identity in Radicle storage and leaves no
/// trace in the working copy, so [`initialize`] creates this directory itself.
pub const MARKER_DIR: &str = ".rad";

/// Whether `repo_path` has already been initialized as a Radicle project.
///
/// Decided by the marker directory alone; no command is run, so a transient
/// CLI failure cannot make an initialized repository look new.
pub fn is_initialized(repo_path: &Path) -> bool {
    repo_path.join(MARKER_DIR).is_dir()
}

/// Initialize `repo_path` as a public Radicle project named `name`.
///
/// Every answer `rad init` would prompt for is passed as a flag, so the
/// command never waits on stdin. On success the [`MARKER_DIR`] is created so
/// later runs skip straight to reading the URN.
pub fn initialize<R: CommandRunner>(
    runner: &R,
    rad: &str,
    repo_path: &Path,
    name: &str,
) -> Result<(), AppError> {
    log::info!("Initializing Radicle project in {}...", repo_path.display());

    let args = [
        "init",
        "--name",
        name,
        "--description",
        "",
        "--public",
        "--no-confirm",
    ];
    runner.run_checked(rad, &args, repo_path).map_err(|e| {
        log::error!(
            "Failed to initialize Radicle project in {}: {}",
            repo_path.display(),
            e
        );
        e
    })?;

    fs::create_dir_all(repo_path.join(MARKER_DIR))?;

    log::info!("Successfully initialized Radicle project: {}", repo_path.display());
    Ok(())
}

/// Read the project identifier printed by `rad .`, trimmed.
pub fn fetch_urn<R: CommandRunner>(
    runner: &R,
    rad: &str,
    repo_path: &Path,
) -> Result<String, AppError> {
    let output = runner.run_checked(rad, &["."], repo_path).map_err(|e| {
        log::error!(
            "Failed to retrieve Radicle URN for {}: {}",
            repo_path.display(),
            e
        );
        e
    })?;

    let urn = output.stdout.trim().to_string();
    if urn.is_empty() {
        log::error!("`rad .` printed no identifier for {}", repo_path.display());
        return Err(AppError::Process {
            command: command_line(rad, &["."]),
            code: output.code,
            stderr: "no identifier on standard output".to_string(),
        });
    }

    log::info!("Retrieved Radicle URN for {}: {}", repo_path.display(), urn);
    Ok(urn)
}
