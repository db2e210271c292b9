//! GitHub REST client - fetches a profile and its repositories

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::constants::{APP_NAME, APP_VERSION, GITHUB_API_VERSION, MAX_PER_PAGE};
use crate::error::{GithubError, Result};
use crate::models::{Profile, Repository};

/// GitHub logins are at most 39 characters long
const MAX_USERNAME_LEN: usize = 39;

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9](?:-?[A-Za-z0-9])*$").expect("username pattern is valid")
    })
}

/// Reject anything that cannot be a GitHub login before touching the network
pub fn validate_username(username: &str) -> Result<()> {
    if username.len() > MAX_USERNAME_LEN || !username_pattern().is_match(username) {
        return Err(GithubError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Thin wrapper over `reqwest::Client` bound to one API base URL
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
    per_page: u8,
}

impl GithubClient {
    pub fn new(api_url: &str, token: Option<&str>, per_page: u8) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            if let Ok(mut value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                value.set_sensitive(true);
                headers.insert(header::AUTHORIZATION, value);
            } else {
                tracing::warn!("Ignoring GitHub token with invalid characters");
            }
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("{}/{}", APP_NAME, APP_VERSION))
            .default_headers(headers)
            .build()?;

        Ok(GithubClient {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        })
    }

    /// Fetch profile and repositories concurrently; both must succeed
    pub async fn fetch_user(&self, username: &str) -> Result<(Profile, Vec<Repository>)> {
        validate_username(username)?;

        let profile_url = format!("{}/users/{}", self.api_url, username);
        let repos_url = format!(
            "{}/users/{}/repos?per_page={}&sort=created",
            self.api_url, username, self.per_page
        );

        futures_util::future::try_join(
            self.get_json::<Profile>(&profile_url, username),
            self.get_json::<Vec<Repository>>(&repos_url, username),
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, username: &str) -> Result<T> {
        tracing::debug!(url, "GET");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GithubError::UserNotFound(username.to_string()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN && rate_limit_exhausted(resp.headers()))
        {
            let reset = header_i64(resp.headers(), "x-ratelimit-reset");
            tracing::warn!(?reset, "Rate limited by GitHub");
            return Err(GithubError::RateLimited { reset });
        }
        if !status.is_success() {
            return Err(GithubError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    header_i64(headers, "x-ratelimit-remaining") == Some(0)
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        let longest = "a".repeat(39);
        for name in ["octocat", "a", "rust-lang", "x1-y2-z3", longest.as_str()] {
            assert!(validate_username(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_invalid_usernames() {
        let too_long = "a".repeat(40);
        for name in ["", "-lead", "trail-", "dou--ble", "sp ace", "../etc", too_long.as_str()] {
            assert!(
                matches!(validate_username(name), Err(GithubError::InvalidUsername(_))),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_header_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));
        assert!(rate_limit_exhausted(&headers));
        assert_eq!(header_i64(&headers, "x-ratelimit-reset"), Some(1_700_000_000));
        assert_eq!(header_i64(&headers, "missing"), None);
    }

    #[test]
    fn test_per_page_clamped_and_url_trimmed() {
        let client = GithubClient::new("https://api.github.com/", None, 0).unwrap();
        assert_eq!(client.per_page, 1);
        assert_eq!(client.api_url, "https://api.github.com");
        let client = GithubClient::new("https://api.github.com", None, 250).unwrap();
        assert_eq!(client.per_page, 100);
    }
}
