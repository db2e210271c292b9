use ratatui::{prelude::*, widgets::*};

/// Braille spinner frames
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Milliseconds each spinner frame stays on screen
pub const SPINNER_FRAME_MS: u128 = 80;

/// Bordered block, highlighted when its child unit has focus
pub fn panel_block(title: impl Into<Line<'static>>, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize, enabled: bool) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    let highlight = if enabled {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Gray)
    };

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(highlight)
        .divider("|")
}

/// Compact count: 999, 1.2k, 34.5k, 1.2m
pub fn format_count(n: u32) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => trim_decimal(n as f64 / 1_000.0, "k"),
        _ => trim_decimal(n as f64 / 1_000_000.0, "m"),
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let s = format!("{:.1}", (value * 10.0).floor() / 10.0);
    format!("{}{}", s.trim_end_matches(".0"), suffix)
}

/// Language color, roughly matching GitHub's linguist palette
pub fn language_color(language: &str) -> Color {
    match language {
        "Rust" => Color::Rgb(222, 165, 132),
        "JavaScript" => Color::Rgb(241, 224, 90),
        "TypeScript" => Color::Rgb(49, 120, 198),
        "Python" => Color::Rgb(53, 114, 165),
        "Go" => Color::Rgb(0, 173, 216),
        "Java" => Color::Rgb(176, 114, 25),
        "C" => Color::Rgb(85, 85, 85),
        "C++" => Color::Rgb(243, 75, 125),
        "Ruby" => Color::Rgb(112, 21, 22),
        "HTML" => Color::Rgb(227, 76, 38),
        "CSS" => Color::Rgb(86, 61, 124),
        "Shell" => Color::Rgb(137, 224, 81),
        _ => Color::White,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
