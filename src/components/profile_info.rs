use ratatui::{prelude::*, widgets::*};

use crate::components::ChildUnit;
use crate::layout::Slot;
use crate::messages::RenderState;
use crate::models::Profile;
use crate::ui::{format_count, panel_block};

/// Profile card, or the last fetch error
pub struct ProfileInfo;

impl ChildUnit for ProfileInfo {
    fn slot(&self) -> Slot {
        Slot::ProfileInfo
    }

    fn draw(&self, f: &mut Frame, area: Rect, state: &RenderState) {
        let block = panel_block(" Profile ", false);

        let lines = if state.is_loading {
            Vec::new()
        } else if let Some(error) = &state.error {
            error_lines(error, state.error_retryable)
        } else if let Some(profile) = &state.profile {
            profile_lines(profile)
        } else {
            vec![Line::from(Span::styled(
                "Search for a GitHub user to get started.",
                Style::default().fg(Color::DarkGray),
            ))]
        };

        let card = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(card, area);
    }
}

fn error_lines(error: &str, retryable: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red).bold(),
    ))];
    if retryable {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Ctrl+R to try again",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn profile_lines(profile: &Profile) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from(vec![
        Span::styled(profile.display_name().to_string(), Style::default().bold()),
        Span::styled(format!("  @{}", profile.login), label),
    ])];

    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        lines.push(Line::from(Span::styled(
            bio.trim().to_string(),
            Style::default().italic(),
        )));
    }
    lines.push(Line::from(""));

    let details = [
        ("Location", profile.location.as_deref()),
        ("Company", profile.company.as_deref()),
        ("Blog", profile.blog.as_deref()),
        ("Email", profile.email.as_deref()),
    ];
    for (name, value) in details {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<9}", name), label),
                Span::raw(value.trim().to_string()),
            ]));
        }
    }
    if let Some(handle) = profile.twitter_username.as_deref() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", "Twitter"), label),
            Span::raw(format!("@{}", handle)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<9}", "Joined"), label),
        Span::raw(profile.member_since()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(format_count(profile.followers), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" followers  ", label),
        Span::styled(format_count(profile.following), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" following", label),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format_count(profile.public_repos), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" repos  ", label),
        Span::styled(format_count(profile.public_gists), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" gists", label),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        profile.html_url.clone(),
        Style::default().fg(Color::Blue).underlined(),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::components::testing::{buffer_text, render_unit};

    fn octocat() -> Profile {
        Profile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            avatar_url: String::new(),
            html_url: "https://github.com/octocat".to_string(),
            bio: None,
            company: Some("@github".to_string()),
            location: Some("San Francisco".to_string()),
            blog: None,
            email: None,
            twitter_username: None,
            public_repos: 8,
            public_gists: 8,
            followers: 12_345,
            following: 9,
            created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
        }
    }

    #[test]
    fn test_renders_profile() {
        let state = RenderState {
            profile: Some(octocat()),
            ..RenderState::default()
        };
        let text = buffer_text(&render_unit(&ProfileInfo, 60, 20, &state));
        assert!(text.contains("The Octocat"));
        assert!(text.contains("San Francisco"));
        assert!(text.contains("12.3k followers"));
        assert!(text.contains("Jan 25, 2011"));
    }

    #[test]
    fn test_hidden_while_loading() {
        let state = RenderState {
            profile: Some(octocat()),
            is_loading: true,
            ..RenderState::default()
        };
        let text = buffer_text(&render_unit(&ProfileInfo, 60, 20, &state));
        assert!(!text.contains("The Octocat"));
    }

    #[test]
    fn test_error_with_retry_hint() {
        let state = RenderState {
            error: Some("GitHub API rate limit exceeded".to_string()),
            error_retryable: true,
            ..RenderState::default()
        };
        let text = buffer_text(&render_unit(&ProfileInfo, 60, 10, &state));
        assert!(text.contains("rate limit exceeded"));
        assert!(text.contains("Ctrl+R to try again"));
    }
}
