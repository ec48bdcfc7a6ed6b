use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::AppError;

/// File name of the identifier map when `urn_file` is not configured.
pub const DEFAULT_URN_FILE_NAME: &str = "radicle_urns.json";

/// Radicle CLI invoked when `rad_binary` is not configured.
pub const DEFAULT_RAD_BINARY: &str = "rad";

/// Repository name to Radicle identifier, persisted as a flat JSON object.
pub type UrnMap = BTreeMap<String, String>;

/// Run configuration, read once from `config.json`.
///
/// Every key is optional at parse time; each pipeline asks for the keys it
/// needs through the accessors, which report a missing key as
/// [`AppError::Config`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub github_org: Option<String>,
    pub api_key: Option<String>,
    pub backup_dir: Option<PathBuf>,
    pub urn_file: Option<PathBuf>,
    pub rad_binary: Option<String>,
}

impl Config {
    pub fn github_org(&self) -> Result<&str, AppError> {
        required(self.github_org.as_deref(), "github_org")
    }

    pub fn api_key(&self) -> Result<&str, AppError> {
        required(self.api_key.as_deref(), "api_key")
    }

    pub fn backup_dir(&self) -> Result<PathBuf, AppError> {
        match &self.backup_dir {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.clone()),
            _ => Err(missing("backup_dir")),
        }
    }

    /// Location of the identifier map, defaulting to a file inside the
    /// backup directory.
    pub fn urn_file(&self) -> Result<PathBuf, AppError> {
        match &self.urn_file {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
            _ => Ok(self.backup_dir()?.join(DEFAULT_URN_FILE_NAME)),
        }
    }

    pub fn rad_binary(&self) -> &str {
        match self.rad_binary.as_deref() {
            Some(bin) if !bin.is_empty() => bin,
            _ => DEFAULT_RAD_BINARY,
        }
    }
}

fn required<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(key)),
    }
}

fn missing(key: &str) -> AppError {
    AppError::Config(format!("missing required key '{}'", key))
}

/// One entry of the `GET /orgs/{org}/repos` response. Only the name is used.
#[derive(Debug, Deserialize)]
pub struct OrgRepo {
    pub name: String,
}
