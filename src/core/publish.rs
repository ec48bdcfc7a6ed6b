use std::path::Path;

use crate::core::git;
use crate::core::radicle;
use crate::core::runner::CommandRunner;
use crate::core::scanner::scan_repos;
use crate::error::AppError;
use crate::models::UrnMap;
use crate::store::urns::UrnStore;

/// Publish every repository under `backup_dir` to the Radicle network and
/// persist the name → URN map.
///
/// Per repository: initialize if the marker directory is missing, read the
/// URN, record it, then push branches and tags. Failing to initialize or to
/// read the URN skips the repository; push failures are logged only. The map
/// is written once, after the last repository, and is returned.
pub fn process_repositories<R: CommandRunner>(
    runner: &R,
    rad: &str,
    backup_dir: &Path,
    store: &UrnStore,
) -> Result<UrnMap, AppError> {
    let mut urns = store.load()?;

    for name in scan_repos(backup_dir)? {
        let repo_path = backup_dir.join(&name);
        log::info!("Processing repository: {}", name);

        let urn = match resolve_urn(runner, rad, &repo_path, &name) {
            Ok(urn) => urn,
            Err(e) => {
                log::error!("Skipping {}: {}", name, e);
                continue;
            }
        };
        urns.insert(name, urn);

        git::push_to_radicle(runner, &repo_path);
    }

    store.save(&urns)?;
    Ok(urns)
}

/// Initialize `repo_path` if needed and return its URN.
fn resolve_urn<R: CommandRunner>(
    runner: &R,
    rad: &str,
    repo_path: &Path,
    name: &str,
) -> Result<String, AppError> {
    if !radicle::is_initialized(repo_path) {
        radicle::initialize(runner, rad, repo_path, name)?;
    }
    radicle::fetch_urn(runner, rad, repo_path)
}
