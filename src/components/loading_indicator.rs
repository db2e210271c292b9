use ratatui::{prelude::*, widgets::*};

use crate::components::ChildUnit;
use crate::layout::Slot;
use crate::messages::RenderState;
use crate::ui::{SPINNER_FRAMES, SPINNER_FRAME_MS};

/// Spinner shown while a fetch is in flight
pub struct LoadingIndicator;

impl ChildUnit for LoadingIndicator {
    fn slot(&self) -> Slot {
        Slot::LoadingIndicator
    }

    fn draw(&self, f: &mut Frame, area: Rect, state: &RenderState) {
        if !state.is_loading {
            return;
        }

        let elapsed = state
            .loading_since
            .map(|since| since.elapsed())
            .unwrap_or_default();
        let frame = (elapsed.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
        let who = state.pending_query.as_deref().unwrap_or("user");

        let line = Line::from(vec![
            Span::styled(SPINNER_FRAMES[frame], Style::default().fg(Color::Cyan).bold()),
            Span::raw(format!(" Fetching {}... {:.1}s", who, elapsed.as_secs_f32())),
            Span::styled("  Ctrl+X to cancel", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{buffer_text, render_unit};

    #[test]
    fn test_blank_when_idle() {
        let text = buffer_text(&render_unit(&LoadingIndicator, 60, 1, &RenderState::default()));
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_shows_query_while_loading() {
        let state = RenderState {
            is_loading: true,
            pending_query: Some("octocat".to_string()),
            ..RenderState::default()
        };
        let text = buffer_text(&render_unit(&LoadingIndicator, 60, 1, &state));
        assert!(text.contains("Fetching octocat..."));
        assert!(text.starts_with(SPINNER_FRAMES[0]));
    }
}
