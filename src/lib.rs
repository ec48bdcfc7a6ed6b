pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod store;

use std::path::Path;

use crate::config::load_config;
use crate::core::github_api::GitHubClient;
use crate::core::mirror::backup_repos;
use crate::core::publish::process_repositories;
use crate::core::runner::SystemRunner;
use crate::error::AppError;
use crate::store::urns::UrnStore;

/// Install the `env_logger` backend, defaulting to `info` when `RUST_LOG`
/// is unset. Call once, from `main`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Mirror pipeline: clone or update every repository of the configured
/// GitHub organization.
pub async fn run_backup(config_path: &Path) -> Result<(), AppError> {
    let config = load_config(config_path)?;
    let client = GitHubClient::new(Some(config.api_key()?.to_string()))?;

    log::info!("Starting backup process...");
    backup_repos(&config, &client, &SystemRunner).await?;
    log::info!("Backup process completed.");

    Ok(())
}

/// Publish pipeline: push every mirrored repository to the Radicle network
/// and record its URN.
pub fn run_publish(config_path: &Path) -> Result<(), AppError> {
    let config = load_config(config_path)?;
    let backup_dir = config.backup_dir()?;
    let store = UrnStore::new(config.urn_file()?);

    log::info!(
        "Starting Radicle push process for backup directory: {}...",
        backup_dir.display()
    );
    process_repositories(&SystemRunner, config.rad_binary(), &backup_dir, &store)?;
    log::info!("Radicle push process completed.");

    Ok(())
}
