use reqwest::Client;

use crate::core::url::{is_valid_github_name, org_repos_url, validate_org_name};
use crate::error::AppError;
use crate::models::OrgRepo;

/// Number of entries GitHub returns per page when no `per_page` is given.
/// Only the first page is read, so a full page means the listing may be
/// truncated.
pub const DEFAULT_PAGE_SIZE: usize = 30;

const USER_AGENT: &str = "radicle-mirror";

/// GitHub API client with optional authentication.
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    /// Create a new client that always targets https://api.github.com.
    /// The base_url is hardcoded so the token is only ever sent to GitHub.
    pub fn new(token: Option<String>) -> Result<Self, AppError> {
        Self::with_base_url(token, "https://api.github.com".to_string())
    }

    /// Create a client with a custom base_url. Only available in tests
    /// to allow pointing at a mock server (e.g., mockito on localhost).
    #[cfg(test)]
    pub fn new_with_base_url(token: Option<String>, base_url: String) -> Self {
        Self::with_base_url(token, base_url).expect("Failed to build HTTP client")
    }

    fn with_base_url(token: Option<String>, base_url: String) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            token,
            base_url,
        })
    }

    /// Build a request with common headers and optional auth.
    fn build_request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, url)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(ref token) = self.token {
            builder = builder.header("Authorization", format!("token {}", token));
        }

        builder
    }

    /// List the names of an organization's repositories, in API order.
    ///
    /// Only the first page of results is consumed. Names that could not be
    /// used safely as a directory name are logged and dropped.
    pub async fn list_org_repos(&self, org: &str) -> Result<Vec<String>, AppError> {
        validate_org_name(org)?;

        let url = org_repos_url(&self.base_url, org);
        let response = self
            .build_request(reqwest::Method::GET, &url)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            return Err(AppError::Network {
                url,
                status: status.as_u16(),
                message: "GitHub API rate limit exceeded or access denied. Check the api_key."
                    .to_string(),
            });
        }

        if !status.is_success() {
            let message = status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string();
            return Err(AppError::Network {
                url,
                status: status.as_u16(),
                message,
            });
        }

        let repos: Vec<OrgRepo> = response.json().await?;
        log::info!("Fetched repositories for organization: {}", org);

        if repos.len() >= DEFAULT_PAGE_SIZE {
            log::warn!(
                "GitHub returned a full page of {} repositories for {}; later pages are not fetched",
                repos.len(),
                org
            );
        }

        let names = repos
            .into_iter()
            .filter_map(|repo| {
                if is_valid_github_name(&repo.name) {
                    Some(repo.name)
                } else {
                    log::warn!("Skipping repository with unusable name: {:?}", repo.name);
                    None
                }
            })
            .collect();

        Ok(names)
    }
}
