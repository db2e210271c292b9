use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::*, widgets::*};

use crate::components::ChildUnit;
use crate::layout::Slot;
use crate::messages::{Focus, RenderState, UiEvent};
use crate::ui::panel_block;

/// Username search box
pub struct SearchInput;

impl ChildUnit for SearchInput {
    fn slot(&self) -> Slot {
        Slot::Search
    }

    fn draw(&self, f: &mut Frame, area: Rect, state: &RenderState) {
        let is_focused = state.focus == Focus::Search;

        let block = panel_block(" Search ", is_focused)
            .title_bottom(Line::from(" Enter:search  Ctrl+U:clear ").right_aligned());
        let block = if is_focused {
            block.border_style(Style::default().fg(Color::Yellow))
        } else {
            block
        };

        let content = if state.query_input.is_empty() {
            Line::from(Span::styled(
                "Enter a GitHub username...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(state.query_input.as_str())
        };
        f.render_widget(Paragraph::new(content).block(block), area);

        if is_focused {
            let x = cursor_x(area, &state.query_input, state.cursor_position);
            f.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
        }
    }

    fn on_key(&self, key: KeyEvent, _state: &RenderState) -> Option<UiEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => Some(UiEvent::SearchClear),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(UiEvent::SubmitSearch),
            KeyCode::Esc => Some(UiEvent::NextFocus),
            KeyCode::Backspace => Some(UiEvent::SearchBackspace),
            KeyCode::Left => Some(UiEvent::SearchCursorLeft),
            KeyCode::Right => Some(UiEvent::SearchCursorRight),
            KeyCode::Char(c) => Some(UiEvent::SearchChar(c)),
            _ => None,
        }
    }
}

/// Terminal column of the cursor, kept inside the box border
fn cursor_x(area: Rect, query: &str, cursor: usize) -> u16 {
    let typed = query[..cursor.min(query.len())].chars().count();
    let typed = u16::try_from(typed).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(typed).saturating_add(1).min(max_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{buffer_text, render_unit};

    #[test]
    fn test_placeholder_when_empty() {
        let text = buffer_text(&render_unit(&SearchInput, 60, 3, &RenderState::default()));
        assert!(text.contains("Enter a GitHub username..."));
    }

    #[test]
    fn test_shows_typed_query() {
        let state = RenderState {
            query_input: "octocat".to_string(),
            cursor_position: 7,
            ..RenderState::default()
        };
        let text = buffer_text(&render_unit(&SearchInput, 60, 3, &state));
        assert!(text.contains("octocat"));
    }

    #[test]
    fn test_keys() {
        let state = RenderState::default();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(SearchInput.on_key(key(KeyCode::Enter), &state), Some(UiEvent::SubmitSearch));
        assert_eq!(
            SearchInput.on_key(key(KeyCode::Char('?')), &state),
            Some(UiEvent::SearchChar('?'))
        );
        assert_eq!(
            SearchInput.on_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), &state),
            Some(UiEvent::SearchClear)
        );
        assert_eq!(SearchInput.on_key(key(KeyCode::Up), &state), None);
    }

    #[test]
    fn test_cursor_follows_typed_text() {
        let area = Rect::new(10, 0, 60, 3);
        assert_eq!(cursor_x(area, "", 0), 11);
        assert_eq!(cursor_x(area, "octocat", 3), 14);
        assert_eq!(cursor_x(area, "été", "ét".len()), 13);
    }

    #[test]
    fn test_cursor_clamped_for_huge_paste() {
        let area = Rect::new(u16::MAX - 40, 0, 40, 3);
        let pasted = "x".repeat(100_000);
        assert_eq!(cursor_x(area, &pasted, pasted.len()), u16::MAX - 2);

        let state = RenderState {
            query_input: pasted.clone(),
            cursor_position: pasted.len(),
            ..RenderState::default()
        };
        let text = buffer_text(&render_unit(&SearchInput, 40, 3, &state));
        assert!(text.contains("xxxx"));
    }
}
