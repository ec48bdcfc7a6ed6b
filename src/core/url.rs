use crate::error::AppError;

/// Validate that a GitHub organization or repository name contains only
/// allowed characters: alphanumerics, hyphens, underscores, and dots.
///
/// `.` and `..` are rejected as well, since repository names double as
/// directory names under the backup directory.
pub fn is_valid_github_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

/// Validate an organization name before it is interpolated into an API URL.
pub fn validate_org_name(org: &str) -> Result<(), AppError> {
    if !is_valid_github_name(org) {
        return Err(AppError::Config(format!(
            "invalid GitHub organization name '{}'. Only alphanumeric characters, hyphens, underscores, and dots are allowed.",
            org
        )));
    }
    Ok(())
}

/// HTTPS clone URL for a repository: `https://github.com/<org>/<repo>.git`.
pub fn clone_url(org: &str, repo: &str) -> String {
    format!("https://github.com/{}/{}.git", org, repo)
}

/// API endpoint listing an organization's repositories.
pub fn org_repos_url(base_url: &str, org: &str) -> String {
    format!("{}/orgs/{}/repos", base_url.trim_end_matches('/'), org)
}

#[cfg(test)]
mod tests {
    use super::*;

    // === is_valid_github_name ===

    #[test]
    fn test_plain_names_valid() {
        assert!(is_valid_github_name("repo"));
        assert!(is_valid_github_name("repo-name"));
        assert!(is_valid_github_name("repo_name"));
        assert!(is_valid_github_name("repo.name"));
        assert!(is_valid_github_name(".github"));
    }

    #[test]
    fn test_empty_invalid() {
        assert!(!is_valid_github_name(""));
    }

    #[test]
    fn test_dot_segments_invalid() {
        assert!(!is_valid_github_name("."));
        assert!(!is_valid_github_name(".."));
    }

    #[test]
    fn test_path_separators_invalid() {
        assert!(!is_valid_github_name("../etc"));
        assert!(!is_valid_github_name("owner/repo"));
        assert!(!is_valid_github_name("repo\\name"));
    }

    #[test]
    fn test_special_chars_invalid() {
        assert!(!is_valid_github_name("repo name"));
        assert!(!is_valid_github_name("repo\"}"));
        assert!(!is_valid_github_name("repo%2F"));
    }

    // === validate_org_name ===

    #[test]
    fn test_invalid_org_is_config_error() {
        let err = validate_org_name("acme corp").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("acme corp"));
    }

    // === URL construction ===

    #[test]
    fn test_clone_url() {
        assert_eq!(clone_url("acme", "widgets"), "https://github.com/acme/widgets.git");
    }

    #[test]
    fn test_org_repos_url_strips_trailing_slash() {
        assert_eq!(
            org_repos_url("https://api.github.com/", "acme"),
            "https://api.github.com/orgs/acme/repos"
        );
        assert_eq!(
            org_repos_url("http://127.0.0.1:1234", "acme"),
            "http://127.0.0.1:1234/orgs/acme/repos"
        );
    }
}
