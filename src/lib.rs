//! # repolens
//!
//! A terminal GitHub profile explorer: search a user, see their profile and
//! browse their repositories sorted by recency, stars or forks.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous; [`HomePage`] lays out the child units,
//!   each of which draws from a read-only [`RenderState`] snapshot
//! - App Layer - the shared state store, the only place state changes
//! - Network Layer (Tokio) - GitHub API fetches with cancellation

pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod messages;
pub mod models;
pub mod network;
pub mod sort;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::{Cli, Settings};
pub use error::{ConfigError, GithubError};
pub use layout::{HomePage, PageLayout, Slot};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Profile, Repository, SortOrder};
pub use network::{GithubClient, NetworkActor};
