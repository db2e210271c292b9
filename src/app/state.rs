//! App state - pure data structure with no I/O logic

use std::time::Instant;

use crate::messages::ui_events::Focus;
use crate::messages::RenderState;
use crate::models::{Profile, Repository, SortOrder};

/// Main application state - pure data, no I/O
pub struct AppState {
    // Search box
    pub query_input: String,
    pub cursor_position: usize,
    pub active_query: Option<String>,
    pub pending_query: Option<String>,

    // Sort control
    pub sort: SortOrder,

    // Fetched data, `repos` always in `sort` order
    pub profile: Option<Profile>,
    pub repos: Vec<Repository>,
    pub has_fetched: bool,

    // Fetch tracking
    pub is_loading: bool,
    pub loading_since: Option<Instant>,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Errors and feedback
    pub error: Option<String>,
    pub error_retryable: bool,
    pub status: Option<String>,

    // UI state
    pub focus: Focus,
    pub selected_repo: usize,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            query_input: String::new(),
            cursor_position: 0,
            active_query: None,
            pending_query: None,
            sort: SortOrder::default(),
            profile: None,
            repos: Vec::new(),
            has_fetched: false,
            is_loading: false,
            loading_since: None,
            next_request_id: 1,
            pending_request_id: None,
            error: None,
            error_retryable: false,
            status: None,
            focus: Focus::default(),
            selected_repo: 0,
            show_help: false,
        }
    }

    /// Start with `username` in the search box, ready to be submitted
    pub fn with_query(username: &str) -> Self {
        let mut state = Self::new();
        state.query_input = username.to_string();
        state.cursor_position = state.query_input.len();
        state
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Currently highlighted repository, if any
    pub fn selected(&self) -> Option<&Repository> {
        self.repos.get(self.selected_repo)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            query_input: self.query_input.clone(),
            cursor_position: self.cursor_position,
            active_query: self.active_query.clone(),
            pending_query: self.pending_query.clone(),
            sort: self.sort,
            profile: self.profile.clone(),
            repos: self.repos.clone(),
            has_fetched: self.has_fetched,
            is_loading: self.is_loading,
            loading_since: self.loading_since,
            error: self.error.clone(),
            error_retryable: self.error_retryable,
            status: self.status.clone(),
            focus: self.focus,
            selected_repo: self.selected_repo,
            show_help: self.show_help,
        }
    }
}
