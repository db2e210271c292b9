use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use crate::components::ChildUnit;
use crate::layout::Slot;
use crate::messages::{Focus, RenderState, UiEvent};
use crate::models::SortOrder;
use crate::ui::{panel_block, render_tabs};

/// Repository sort order selector
pub struct SortControl;

impl ChildUnit for SortControl {
    fn slot(&self) -> Slot {
        Slot::SortControl
    }

    fn draw(&self, f: &mut Frame, area: Rect, state: &RenderState) {
        let is_focused = state.focus == Focus::SortControl;
        let titles: Vec<&str> = SortOrder::ALL.iter().map(|o| o.as_str()).collect();
        let selected = SortOrder::ALL
            .iter()
            .position(|o| *o == state.sort)
            .unwrap_or(0);

        let block = panel_block(" Sort ", is_focused)
            .title_bottom(Line::from(" r/s/f or ←/→ ").right_aligned());
        let tabs = render_tabs(&titles, selected, !state.is_loading).block(block);
        f.render_widget(tabs, area);
    }

    fn on_key(&self, key: KeyEvent, _state: &RenderState) -> Option<UiEvent> {
        match key.code {
            KeyCode::Char('r') => Some(UiEvent::SetSort(SortOrder::Recent)),
            KeyCode::Char('s') => Some(UiEvent::SetSort(SortOrder::Stars)),
            KeyCode::Char('f') => Some(UiEvent::SetSort(SortOrder::Forks)),
            KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevSort),
            KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextSort),
            _ => None,
        }
    }
}
