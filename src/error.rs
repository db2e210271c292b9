//! Error types for the GitHub client and configuration loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("'{0}' is not a valid GitHub username")]
    InvalidUsername(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("GitHub API rate limit exceeded{}", reset_suffix(.reset))]
    RateLimited { reset: Option<i64> },

    #[error("GitHub API returned status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn reset_suffix(reset: &Option<i64>) -> String {
    reset
        .as_ref()
        .and_then(|secs| chrono::DateTime::from_timestamp(*secs, 0))
        .map(|at| format!(" (resets at {} UTC)", at.format("%H:%M")))
        .unwrap_or_default()
}

impl GithubError {
    /// True when retrying the same request later may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, GithubError::RateLimited { .. } | GithubError::Http(_))
            || matches!(self, GithubError::Status(code) if *code >= 500)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, GithubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_message_includes_reset() {
        let err = GithubError::RateLimited { reset: Some(0) };
        assert_eq!(
            err.to_string(),
            "GitHub API rate limit exceeded (resets at 00:00 UTC)"
        );
        let err = GithubError::RateLimited { reset: None };
        assert_eq!(err.to_string(), "GitHub API rate limit exceeded");
    }

    #[test]
    fn test_transient_classification() {
        assert!(GithubError::Status(502).is_transient());
        assert!(!GithubError::Status(404).is_transient());
        assert!(!GithubError::UserNotFound("x".into()).is_transient());
    }
}
