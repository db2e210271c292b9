//! Render state - read-only snapshot of the store handed to every child unit

use std::time::Instant;

use crate::messages::ui_events::Focus;
use crate::models::{Profile, Repository, SortOrder};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Search
    pub query_input: String,
    pub cursor_position: usize,
    /// Username whose result (profile or error) is on screen
    pub active_query: Option<String>,
    /// Username of the fetch in flight
    pub pending_query: Option<String>,

    // Sort
    pub sort: SortOrder,

    // Fetched data
    pub profile: Option<Profile>,
    pub repos: Vec<Repository>,
    /// A fetch has completed successfully at least once for `active_query`
    pub has_fetched: bool,

    // Loading
    pub is_loading: bool,
    pub loading_since: Option<Instant>,

    // Errors and feedback
    pub error: Option<String>,
    pub error_retryable: bool,
    pub status: Option<String>,

    // UI state
    pub focus: Focus,
    pub selected_repo: usize,
    pub show_help: bool,
}
