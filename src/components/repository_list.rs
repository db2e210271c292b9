use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};

use crate::components::ChildUnit;
use crate::layout::Slot;
use crate::messages::{Focus, RenderState, UiEvent};
use crate::models::Repository;
use crate::ui::{format_count, language_color, panel_block};

/// The fetched repositories, in the store's sort order
pub struct RepositoryList;

impl ChildUnit for RepositoryList {
    fn slot(&self) -> Slot {
        Slot::RepositoryList
    }

    fn draw(&self, f: &mut Frame, area: Rect, state: &RenderState) {
        let is_focused = state.focus == Focus::RepositoryList;
        let title = if state.has_fetched && !state.is_loading {
            format!(" Repositories ({}) ", state.repos.len())
        } else {
            String::from(" Repositories ")
        };
        let block = panel_block(title, is_focused)
            .title_bottom(Line::from(" ↑/↓ select  c:clone url ").right_aligned());

        if state.is_loading || !state.has_fetched {
            f.render_widget(block, area);
            return;
        }

        if state.repos.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No repos found",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = state.repos.iter().map(repo_item).collect();
        let highlight_style = if is_focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style)
            .highlight_symbol("▌");

        let mut list_state = ListState::default();
        list_state.select(Some(state.selected_repo.min(state.repos.len() - 1)));
        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn on_key(&self, key: KeyEvent, _state: &RenderState) -> Option<UiEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrevRepo),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNextRepo),
            KeyCode::Char('c') | KeyCode::Enter => Some(UiEvent::ShowCloneUrl),
            _ => None,
        }
    }
}

fn repo_item(repo: &Repository) -> ListItem<'static> {
    let dim = Style::default().fg(Color::DarkGray);

    let mut header = vec![Span::styled(
        repo.name.clone(),
        Style::default().fg(Color::Cyan).bold(),
    )];
    if repo.fork {
        header.push(Span::styled(" (fork)", dim));
    }
    header.push(Span::raw("  "));
    header.push(Span::styled(
        format!("★ {}", format_count(repo.stargazers_count)),
        Style::default().fg(Color::Yellow),
    ));
    header.push(Span::styled(
        format!("  ⑂ {}", format_count(repo.forks_count)),
        Style::default().fg(Color::Green),
    ));
    if let Some(language) = &repo.language {
        header.push(Span::styled(
            format!("  ● {}", language),
            Style::default().fg(language_color(language)),
        ));
    }

    let description = repo
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("No description provided");

    let footer = format!(
        "created {} · {}",
        repo.created_at.format("%b %-d, %Y"),
        repo.default_branch
    );

    ListItem::new(vec![
        Line::from(header),
        Line::from(format!("  {}", description)),
        Line::from(Span::styled(format!("  {}", footer), dim)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{buffer_text, render_unit};
    use crate::sort::fixtures::repo;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_nothing_before_first_fetch() {
        let text = buffer_text(&render_unit(&RepositoryList, 80, 10, &RenderState::default()));
        assert!(text.contains(" Repositories "));
        assert!(!text.contains("No repos found"));
    }

    #[test]
    fn test_empty_after_fetch() {
        let state = RenderState {
            has_fetched: true,
            ..RenderState::default()
        };
        let text = buffer_text(&render_unit(&RepositoryList, 80, 10, &state));
        assert!(text.contains("No repos found"));
        assert!(text.contains("Repositories (0)"));
    }

    #[test]
    fn test_lists_in_store_order() {
        let state = RenderState {
            has_fetched: true,
            repos: vec![repo("zeta", 1, 2_500, 1), repo("alpha", 2, 3, 0)],
            ..RenderState::default()
        };
        let text = buffer_text(&render_unit(&RepositoryList, 80, 12, &state));
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < alpha);
        assert!(text.contains("★ 2.5k"));
    }

    #[test]
    fn test_keys() {
        let state = RenderState::default();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            RepositoryList.on_key(key(KeyCode::Down), &state),
            Some(UiEvent::SelectNextRepo)
        );
        assert_eq!(
            RepositoryList.on_key(key(KeyCode::Char('c')), &state),
            Some(UiEvent::ShowCloneUrl)
        );
        assert_eq!(RepositoryList.on_key(key(KeyCode::Char('q')), &state), None);
    }
}
