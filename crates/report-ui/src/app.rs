//! Main application state and TUI event loop for the ticket report tool.
//!
//! [`App`] owns the theme and view mode and drives the static event loops
//! for the dashboard and the analysis preview. Both views render once per
//! tick and exit on `q` / `Q` / `Ctrl+C`.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use report_core::models::AnalysisRecord;
use report_data::aggregator::WorkerAnalysis;
use report_data::store::AppendOutcome;

use crate::dashboard_view;
use crate::preview_view;
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the TUI is currently rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Store-backed dashboard of saved analyses.
    Dashboard,
    /// Breakdown preview for one worker and date range.
    Preview,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the ticket report TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, view_mode: ViewMode) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
        }
    }

    // ── Public event loops ────────────────────────────────────────────────────

    /// Run the dashboard view over the given store records, then wait for
    /// `q` / `Ctrl+C`.
    pub fn run_dashboard(self, records: Vec<AnalysisRecord>) -> io::Result<()> {
        let theme = self.theme;
        run_until_quit(move |frame| {
            let area = frame.area();
            if records.is_empty() {
                dashboard_view::render_no_data(frame, area, &theme);
            } else {
                dashboard_view::render_dashboard(frame, area, &records, &theme);
            }
        })
    }

    /// Run the analysis preview view, then wait for `q` / `Ctrl+C`.
    pub fn run_preview(
        self,
        analysis: WorkerAnalysis,
        save_status: Option<AppendOutcome>,
    ) -> io::Result<()> {
        let theme = self.theme;
        run_until_quit(move |frame| {
            let area = frame.area();
            preview_view::render_preview(frame, area, &analysis, save_status, &theme);
        })
    }
}

// ── Event loop ────────────────────────────────────────────────────────────────

/// Shared static-view event loop.
///
/// Sets up the terminal, redraws via `render` every tick, and restores the
/// terminal state unconditionally on exit.
fn run_until_quit(mut render: impl FnMut(&mut Frame)) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| render(frame))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break;
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') => break,
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── ViewMode ──────────────────────────────────────────────────────────────

    #[test]
    fn test_view_mode_enum_equality() {
        assert_eq!(ViewMode::Dashboard, ViewMode::Dashboard);
        assert_eq!(ViewMode::Preview, ViewMode::Preview);
        assert_ne!(ViewMode::Dashboard, ViewMode::Preview);
    }

    #[test]
    fn test_view_mode_clone() {
        let mode = ViewMode::Preview;
        let clone = mode.clone();
        assert_eq!(mode, clone);
    }

    // ── App::new ──────────────────────────────────────────────────────────────

    #[test]
    fn test_app_creation_dashboard() {
        let app = App::new("dark", ViewMode::Dashboard);
        assert_eq!(app.view_mode, ViewMode::Dashboard);
    }

    #[test]
    fn test_app_creation_unknown_theme_falls_back() {
        // Should not panic for unknown theme names.
        let app = App::new("neon", ViewMode::Preview);
        assert_eq!(app.view_mode, ViewMode::Preview);
    }
}
