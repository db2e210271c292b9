//! Command handlers - business logic for processing UI events and fetch results

use std::time::Instant;

use crate::app::AppState;
use crate::messages::ui_events::Focus;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::SortOrder;
use crate::sort::sort_repos;

impl AppState {
    // ========================
    // Focus
    // ========================

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
        self.cursor_position = self.query_input.len();
    }

    // ========================
    // Search box editing
    // ========================

    pub fn search_char(&mut self, c: char) {
        if self.cursor_position <= self.query_input.len() {
            self.query_input.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn search_backspace(&mut self) {
        if self.cursor_position > 0 {
            let prev_pos = self.query_input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.query_input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    pub fn search_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.query_input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn search_cursor_right(&mut self) {
        if self.cursor_position < self.query_input.len() {
            self.cursor_position = self.query_input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.query_input.len());
        }
    }

    pub fn search_clear(&mut self) {
        self.query_input.clear();
        self.cursor_position = 0;
    }

    // ========================
    // Fetching
    // ========================

    /// Submit the search box. Returns the commands to send, in order: a
    /// cancel for any in-flight fetch, then the new fetch.
    pub fn submit_search(&mut self) -> Vec<NetworkCommand> {
        let username = self.query_input.trim().to_string();
        if username.is_empty() {
            return Vec::new();
        }
        self.sort = SortOrder::Recent;
        self.start_fetch(username)
    }

    /// Fetch the user on screen again, keeping the sort order
    pub fn refresh(&mut self) -> Vec<NetworkCommand> {
        match self.active_query.clone() {
            Some(username) => self.start_fetch(username),
            None => Vec::new(),
        }
    }

    fn start_fetch(&mut self, username: String) -> Vec<NetworkCommand> {
        let mut commands = Vec::with_capacity(2);
        if let Some(old) = self.pending_request_id.take() {
            commands.push(NetworkCommand::CancelFetch(old));
        }

        let id = self.next_id();
        tracing::info!(id, username = %username, "Submitting search");

        self.pending_request_id = Some(id);
        self.is_loading = true;
        self.loading_since = Some(Instant::now());
        self.pending_query = Some(username.clone());
        self.error = None;
        self.error_retryable = false;
        self.status = None;
        self.selected_repo = 0;

        commands.push(NetworkCommand::FetchUser { id, username });
        commands
    }

    /// Abandon the in-flight fetch, if any
    pub fn cancel_fetch(&mut self) -> Option<NetworkCommand> {
        let id = self.pending_request_id.take()?;
        self.pending_query = None;
        self.is_loading = false;
        self.loading_since = None;
        self.status = Some(String::from("Fetch cancelled"));
        Some(NetworkCommand::CancelFetch(id))
    }

    /// Apply a network response. Responses for anything but the pending
    /// fetch are stale and leave the state untouched.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();
        if self.pending_request_id != Some(id) {
            tracing::debug!(id, pending = ?self.pending_request_id, "Dropping stale response");
            return;
        }

        self.pending_request_id = None;
        self.is_loading = false;
        self.loading_since = None;
        let username = self.pending_query.take();

        match response {
            NetworkResponse::UserLoaded {
                profile,
                mut repos,
                time_ms,
                ..
            } => {
                sort_repos(&mut repos, self.sort);
                self.status = Some(format!(
                    "Loaded {} with {} repositories in {}ms",
                    profile.login,
                    repos.len(),
                    time_ms
                ));
                self.active_query = username;
                self.profile = Some(*profile);
                self.repos = repos;
                self.has_fetched = true;
                self.selected_repo = 0;
                self.error = None;
                self.error_retryable = false;
            }
            NetworkResponse::Failed {
                message, retryable, ..
            } => {
                self.active_query = username;
                self.profile = None;
                self.repos.clear();
                self.has_fetched = false;
                self.selected_repo = 0;
                self.error = Some(message);
                self.error_retryable = retryable;
            }
            NetworkResponse::Cancelled { .. } => {
                self.status = Some(String::from("Fetch cancelled"));
            }
        }
    }

    // ========================
    // Sorting
    // ========================

    /// Re-sort the fetched repositories. Ignored while a fetch is in flight.
    pub fn set_sort(&mut self, order: SortOrder) {
        if self.is_loading || self.sort == order {
            return;
        }
        self.sort = order;
        sort_repos(&mut self.repos, order);
        self.selected_repo = 0;
    }

    pub fn next_sort(&mut self) {
        self.set_sort(self.sort.next());
    }

    pub fn prev_sort(&mut self) {
        self.set_sort(self.sort.prev());
    }

    // ========================
    // Repository list
    // ========================

    pub fn select_next_repo(&mut self) {
        if self.selected_repo + 1 < self.repos.len() {
            self.selected_repo += 1;
        }
    }

    pub fn select_prev_repo(&mut self) {
        self.selected_repo = self.selected_repo.saturating_sub(1);
    }

    pub fn show_clone_url(&mut self) {
        if let Some(line) = self.selected().map(|repo| format!("git clone {}", repo.clone_url)) {
            self.status = Some(line);
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
