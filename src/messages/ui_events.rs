//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::components;
use crate::messages::RenderState;
use crate::models::SortOrder;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus navigation
    NextFocus,
    PrevFocus,
    FocusSearch,

    // Search box
    SearchChar(char),
    SearchBackspace,
    SearchCursorLeft,
    SearchCursorRight,
    SearchClear,
    SubmitSearch,

    // Fetch control
    CancelFetch,
    Refresh,

    // Sort control
    SetSort(SortOrder),
    NextSort,
    PrevSort,

    // Repository list
    SelectNextRepo,
    SelectPrevRepo,
    ShowCloneUrl,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Child unit that currently receives key presses
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Search,
    SortControl,
    RepositoryList,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Search => Focus::SortControl,
            Focus::SortControl => Focus::RepositoryList,
            Focus::RepositoryList => Focus::Search,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Search => Focus::RepositoryList,
            Focus::SortControl => Focus::Search,
            Focus::RepositoryList => Focus::SortControl,
        }
    }
}

/// Convert a key event to a UiEvent based on the latest store snapshot.
///
/// Global shortcuts win, then the focused child unit gets the key, then the
/// normal-mode fallbacks apply.
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('x') => return Some(UiEvent::CancelFetch),
            KeyCode::Char('r') => return Some(UiEvent::Refresh),
            _ => {}
        }
    }

    if state.show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Tab => return Some(UiEvent::NextFocus),
        KeyCode::BackTab => return Some(UiEvent::PrevFocus),
        _ => {}
    }

    if let Some(event) = components::focused_unit(state.focus).on_key(key, state) {
        return Some(event);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('/') => Some(UiEvent::FocusSearch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_focus(focus: Focus) -> RenderState {
        RenderState {
            focus,
            ..RenderState::default()
        }
    }

    #[test]
    fn test_q_types_into_search() {
        let state = state_with_focus(Focus::Search);
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), &state),
            Some(UiEvent::SearchChar('q'))
        );
    }

    #[test]
    fn test_q_quits_outside_search() {
        let state = state_with_focus(Focus::RepositoryList);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), &state), Some(UiEvent::Quit));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let state = state_with_focus(Focus::Search);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, &state), Some(UiEvent::Quit));
    }

    #[test]
    fn test_help_swallows_keys() {
        let state = RenderState {
            show_help: true,
            ..RenderState::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('s')), &state), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_tab_cycles_focus() {
        let state = state_with_focus(Focus::SortControl);
        assert_eq!(key_to_ui_event(press(KeyCode::Tab), &state), Some(UiEvent::NextFocus));
        assert_eq!(Focus::SortControl.next(), Focus::RepositoryList);
        assert_eq!(Focus::Search.prev(), Focus::RepositoryList);
    }

    #[test]
    fn test_release_events_ignored() {
        let state = RenderState::default();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, &state), None);
    }
}
