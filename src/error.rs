use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request to {url} failed with status {status}: {message}")]
    Network {
        url: String,
        status: u16,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("`{command}` {}: {stderr}", describe_exit(.code))]
    Process {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True for failures talking to the GitHub API, whether the request never
    /// completed or came back with a non-success status.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network { .. } | AppError::Http(_))
    }

    /// True for failures of an external command.
    pub fn is_process(&self) -> bool {
        matches!(self, AppError::Process { .. } | AppError::Spawn { .. })
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
