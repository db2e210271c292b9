//! Command-line arguments and the optional YAML config file
//!
//! Precedence: CLI flag or env var, then config file, then built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::constants::{
    APP_NAME, DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_PER_PAGE, DEFAULT_USER, MAX_PER_PAGE,
};
use crate::error::ConfigError;

/// Browse a GitHub user's profile and repositories from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = APP_NAME, version, about)]
pub struct Cli {
    /// User to load on startup
    #[arg(value_name = "USER")]
    pub user: Option<String>,

    /// GitHub token, raises the API rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", env = "REPOLENS_API_URL")]
    pub api_url: Option<String>,

    /// Repositories fetched per user (1-100)
    #[arg(long, value_name = "N")]
    pub per_page: Option<u16>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE", env = "REPOLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write logs
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Start with an empty page instead of fetching a user
    #[arg(long)]
    pub no_initial_fetch: bool,
}

/// Contents of `config.yaml`; every key is optional
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub default_user: Option<String>,
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub per_page: Option<u16>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Load a config file. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Some(FileConfig::default()));
        }

        serde_yaml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// `<config dir>/repolens/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.yaml"))
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// User fetched on startup, `None` for an empty page
    pub initial_user: Option<String>,
    pub token: Option<String>,
    pub api_url: String,
    pub per_page: u8,
    pub log_file: PathBuf,
}

impl Settings {
    /// Read the config file named by `cli` (or the default one) and merge
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let path = cli.config.clone().or_else(default_config_path);
        let file = match path {
            Some(path) => {
                let loaded = FileConfig::load(&path)?;
                match &loaded {
                    Some(_) => tracing::info!(path = %path.display(), "Loaded config file"),
                    None if cli.config.is_some() => {
                        tracing::warn!(path = %path.display(), "Config file not found")
                    }
                    None => {}
                }
                loaded.unwrap_or_default()
            }
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: Cli, file: FileConfig) -> Self {
        let initial_user = if cli.no_initial_fetch {
            None
        } else {
            Some(
                non_blank(cli.user)
                    .or_else(|| non_blank(file.default_user))
                    .unwrap_or_else(|| DEFAULT_USER.to_string()),
            )
        };

        let per_page = cli
            .per_page
            .or(file.per_page)
            .unwrap_or(DEFAULT_PER_PAGE.into())
            .clamp(1, MAX_PER_PAGE.into()) as u8;

        Settings {
            initial_user,
            token: non_blank(cli.token).or_else(|| non_blank(file.token)),
            api_url: non_blank(cli.api_url)
                .or_else(|| non_blank(file.api_url))
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            per_page,
            log_file: cli
                .log_file
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
