//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that owns the shared state. Child units only ever see the
/// snapshots it publishes and reach it through `UiEvent`s.
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
    fetch_on_start: bool,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
            fetch_on_start: false,
        }
    }

    /// Pre-fill the search box with `username` and fetch it as soon as the
    /// actor starts
    pub fn with_initial_user(mut self, username: &str) -> Self {
        self.state = AppState::with_query(username);
        self.fetch_on_start = true;
        self
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        if self.fetch_on_start {
            let commands = self.state.submit_search();
            self.send_all(commands);
        }

        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send_all(&self, commands: Vec<NetworkCommand>) {
        for cmd in commands {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Focus
            UiEvent::NextFocus => self.state.next_focus(),
            UiEvent::PrevFocus => self.state.prev_focus(),
            UiEvent::FocusSearch => self.state.focus_search(),

            // Search box
            UiEvent::SearchChar(c) => self.state.search_char(c),
            UiEvent::SearchBackspace => self.state.search_backspace(),
            UiEvent::SearchCursorLeft => self.state.search_cursor_left(),
            UiEvent::SearchCursorRight => self.state.search_cursor_right(),
            UiEvent::SearchClear => self.state.search_clear(),
            UiEvent::SubmitSearch => {
                let commands = self.state.submit_search();
                self.send_all(commands);
            }

            // Fetch control
            UiEvent::CancelFetch => {
                if let Some(cmd) = self.state.cancel_fetch() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::Refresh => {
                let commands = self.state.refresh();
                self.send_all(commands);
            }

            // Sort control
            UiEvent::SetSort(order) => self.state.set_sort(order),
            UiEvent::NextSort => self.state.next_sort(),
            UiEvent::PrevSort => self.state.prev_sort(),

            // Repository list
            UiEvent::SelectNextRepo => self.state.select_next_repo(),
            UiEvent::SelectPrevRepo => self.state.select_prev_repo(),
            UiEvent::ShowCloneUrl => self.state.show_clone_url(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
