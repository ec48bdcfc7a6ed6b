use std::fs;
use std::path::Path;

use crate::core::git;
use crate::core::github_api::GitHubClient;
use crate::core::runner::CommandRunner;
use crate::error::AppError;
use crate::models::Config;

/// Mirror every repository of the configured organization into `backup_dir`.
///
/// 1. Create the backup directory if needed
/// 2. List the organization's repositories (first page only)
/// 3. For each repository, clone it if absent, then fetch and pull
///
/// Configuration and listing failures abort the run before any git command
/// is issued. A failure on one repository is logged and the loop moves on.
pub async fn backup_repos<R: CommandRunner>(
    config: &Config,
    client: &GitHubClient,
    runner: &R,
) -> Result<(), AppError> {
    let org = config.github_org()?;
    let backup_dir = config.backup_dir()?;

    if !backup_dir.exists() {
        fs::create_dir_all(&backup_dir)?;
    }

    let repos = client.list_org_repos(org).await?;

    for repo in &repos {
        backup_repo(runner, repo, org, &backup_dir);
    }

    Ok(())
}

/// Clone-if-absent then update one repository, logging any failure.
fn backup_repo<R: CommandRunner>(runner: &R, repo: &str, org: &str, backup_dir: &Path) {
    if let Err(e) = backup_repo_inner(runner, repo, org, backup_dir) {
        log::error!("Backup failed for {}: {}", repo, e);
    }
}

fn backup_repo_inner<R: CommandRunner>(
    runner: &R,
    repo: &str,
    org: &str,
    backup_dir: &Path,
) -> Result<(), AppError> {
    git::clone_repo(runner, repo, org, backup_dir)?;
    git::update_repo(runner, repo, backup_dir)
}
