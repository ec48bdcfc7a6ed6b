use std::path::Path;

use crate::core::runner::CommandRunner;
use crate::core::url::clone_url;
use crate::error::AppError;

const GIT: &str = "git";

/// Name of the git remote that `rad init` configures.
pub const RAD_REMOTE: &str = "rad";

/// Whether a clone was performed or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneOutcome {
    Cloned,
    AlreadyPresent,
}

/// Clone `https://github.com/<org>/<repo>.git` into `backup_dir`, unless a
/// directory named `repo` already exists there.
///
/// The clone runs with `backup_dir` as working directory so git picks the
/// target directory name itself, which matches `repo`.
pub fn clone_repo<R: CommandRunner>(
    runner: &R,
    repo: &str,
    org: &str,
    backup_dir: &Path,
) -> Result<CloneOutcome, AppError> {
    let repo_path = backup_dir.join(repo);
    if repo_path.exists() {
        log::info!("{} already cloned.", repo);
        return Ok(CloneOutcome::AlreadyPresent);
    }

    log::info!("Cloning {}...", repo);
    let url = clone_url(org, repo);
    runner.run_checked(GIT, &["clone", &url], backup_dir)?;

    Ok(CloneOutcome::Cloned)
}

/// Fetch every remote, then pull the current branch.
pub fn update_repo<R: CommandRunner>(
    runner: &R,
    repo: &str,
    backup_dir: &Path,
) -> Result<(), AppError> {
    let repo_path = backup_dir.join(repo);
    log::info!("Updating {}...", repo);

    runner.run_checked(GIT, &["fetch", "--all"], &repo_path)?;
    runner.run_checked(GIT, &["pull"], &repo_path)?;

    Ok(())
}

/// Push all branches, then all tags, to [`RAD_REMOTE`].
///
/// Both pushes are attempted even if the first fails. Failures are logged and
/// reported through the return value; the caller decides whether they matter.
pub fn push_to_radicle<R: CommandRunner>(runner: &R, repo_path: &Path) -> bool {
    log::info!("Pushing {} to Radicle network...", repo_path.display());

    let mut pushed = true;
    for refs in ["--all", "--tags"] {
        if let Err(e) = runner.run_checked(GIT, &["push", RAD_REMOTE, refs], repo_path) {
            log::error!(
                "Failed to push {} ({}) to Radicle network: {}",
                repo_path.display(),
                refs,
                e
            );
            pushed = false;
        }
    }

    if pushed {
        log::info!("Successfully pushed {} to Radicle network", repo_path.display());
    }
    pushed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::runner::testing::{fail, ok, FakeRunner};
    use tempfile::TempDir;

    #[test]
    fn test_clone_invokes_git_in_backup_dir() {
        let tmp = TempDir::new().unwrap();
        let runner = FakeRunner::new();

        let outcome = clone_repo(&runner, "widgets", "acme", tmp.path()).unwrap();

        assert_eq!(outcome, CloneOutcome::Cloned);
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].line(), "git clone https://github.com/acme/widgets.git");
        assert_eq!(calls[0].cwd, tmp.path());
    }

    #[test]
    fn test_clone_to_existing_dir_is_noop() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("widgets")).unwrap();
        let runner = FakeRunner::new();

        let outcome = clone_repo(&runner, "widgets", "acme", tmp.path()).unwrap();

        assert_eq!(outcome, CloneOutcome::AlreadyPresent);
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_clone_failure_is_process_error() {
        let tmp = TempDir::new().unwrap();
        let runner = FakeRunner::with_responder(|_| fail("fatal: repository not found"));

        let err = clone_repo(&runner, "widgets", "acme", tmp.path()).unwrap_err();
        assert!(err.is_process());
        assert!(err.to_string().contains("repository not found"));
    }

    #[test]
    fn test_update_fetches_then_pulls_inside_repo() {
        let tmp = TempDir::new().unwrap();
        let runner = FakeRunner::new();

        update_repo(&runner, "widgets", tmp.path()).unwrap();

        assert_eq!(runner.lines(), vec!["git fetch --all", "git pull"]);
        for call in runner.calls() {
            assert_eq!(call.cwd, tmp.path().join("widgets"));
        }
    }

    #[test]
    fn test_update_stops_after_failed_fetch() {
        let tmp = TempDir::new().unwrap();
        let runner = FakeRunner::with_responder(|inv| {
            if inv.args[0] == "fetch" {
                fail("could not resolve host")
            } else {
                ok("")
            }
        });

        let err = update_repo(&runner, "widgets", tmp.path()).unwrap_err();
        assert!(err.is_process());
        assert_eq!(runner.lines(), vec!["git fetch --all"]);
    }

    #[test]
    fn test_push_sends_branches_and_tags() {
        let tmp = TempDir::new().unwrap();
        let runner = FakeRunner::new();

        assert!(push_to_radicle(&runner, tmp.path()));
        assert_eq!(
            runner.lines(),
            vec!["git push rad --all", "git push rad --tags"]
        );
    }

    #[test]
    fn test_push_tags_attempted_after_branch_failure() {
        let tmp = TempDir::new().unwrap();
        let runner = FakeRunner::with_responder(|inv| {
            if inv.args.iter().any(|a| a == "--all") {
                fail("rejected")
            } else {
                ok("")
            }
        });

        assert!(!push_to_radicle(&runner, tmp.path()));
        assert_eq!(runner.calls().len(), 2);
    }
}
