//! repolens - Actor-based GitHub profile explorer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state store processing events
//! - Network Layer (Tokio) - async GitHub fetches

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use repolens::components::draw_page;
use repolens::messages::ui_events::key_to_ui_event;
use repolens::ui::centered_rect;
use repolens::{
    AppActor, Cli, GithubClient, NetworkActor, NetworkCommand, NetworkResponse, RenderState,
    Settings, UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::resolve(Cli::parse()).context("loading configuration")?;

    // Initialize logging to file
    let _log_guard = init_logging(&settings.log_file)?;
    tracing::info!(
        api_url = %settings.api_url,
        per_page = settings.per_page,
        authenticated = settings.token.is_some(),
        "Starting"
    );

    let client = GithubClient::new(&settings.api_url, settings.token.as_deref(), settings.per_page)
        .context("building HTTP client")?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let mut app_actor = AppActor::new(net_cmd_tx, render_tx);
    if let Some(user) = &settings.initial_user {
        app_actor = app_actor.with_initial_user(user);
    }
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Log to a file; the terminal belongs to the UI. Filter from `RUST_LOG`,
/// `info` by default.
fn init_logging(path: &Path) -> anyhow::Result<WorkerGuard> {
    let file_appender = log_appender(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    Ok(guard)
}

/// Open (or create) the log file without rotation
fn log_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| repolens::constants::DEFAULT_LOG_FILE.to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, &current_state) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_page(f, chunks[0], state);
    draw_status_bar(f, state, chunks[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = match &state.status {
        Some(status) => format!(" {} ", status),
        None => String::from(" Tab:focus | /:search | ?:help | Ctrl+R:refresh | q:quit "),
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 REPOLENS - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Move focus: search, sort, repositories
   /                  Jump to the search box

 SEARCH
   Enter              Fetch the typed user
   Ctrl+U             Clear the search box
   Esc                Leave the search box

 SORT
   r / s / f          Most recent / most stars / most forks
   ← / →              Previous / next order

 REPOSITORIES
   ↑ / ↓  (k / j)     Move selection
   c / Enter          Show clone URL

 GENERAL
   Ctrl+R             Fetch the current user again
   Ctrl+X             Cancel the running fetch
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
