//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// User fetched on startup when neither the CLI nor the config file names one
pub const DEFAULT_USER: &str = "octocat";

/// Base URL of the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repositories requested per page (GitHub caps this at 100)
pub const DEFAULT_PER_PAGE: u8 = 100;

/// Upper bound accepted by the repos endpoint for `per_page`
pub const MAX_PER_PAGE: u8 = 100;

/// Pinned REST API version header value
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Terminal width from which the body panels sit side by side
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// Default log file, written in the current directory
pub const DEFAULT_LOG_FILE: &str = "repolens.log";

/// Application name
pub const APP_NAME: &str = "repolens";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
