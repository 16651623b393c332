//! Applicant TUI - a terminal job application form
//!
//! A Ratatui-based form with role-dependent fields, inline validation and a
//! post-submit summary.

mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::{AppConfig, LOG_FILE_NAME};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Poll interval while the fade-in runs (~60fps)
const ANIMATION_POLL: Duration = Duration::from_millis(16);
/// Poll interval otherwise
const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // A broken config file should not keep the form from opening
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let (log_guard, log_error) = match init_logging(&config) {
        Ok(guard) => (guard, None),
        Err(err) => (None, Some(err)),
    };

    let mut app = App::new(config);
    if let Some(err) = config_error {
        tracing::warn!("Failed to load config, using defaults: {err:?}");
        app.push_error(format!("Config file ignored: {err}"));
    }
    if let Some(err) = log_error {
        app.push_error(format!("Logging disabled: {err}"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Flush pending log lines before a possible exit
    drop(log_guard);

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Send tracing output to the log file in the data directory.
///
/// The terminal is owned by the alternate screen, so nothing is logged to
/// stderr. Without a data directory logging stays off.
fn init_logging(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let Some(dir) = AppConfig::data_dir() else {
        return Ok(None);
    };
    let (writer, guard) = tracing_appender::non_blocking(log_appender(&dir)?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}

/// Appender for `LOG_FILE_NAME` inside `dir`, creating the directory if needed
fn log_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .with_context(|| format!("cannot open {}", dir.join(LOG_FILE_NAME).display()))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        let animating = app.update_fade();

        terminal.draw(|frame| ui::draw(frame, app))?;

        let poll_duration = if animating {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(_width, _height) => {
                    // Layout is recomputed from the new size on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!("Quitting");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_appender_writes_into_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        let mut appender = log_appender(&logs).unwrap();
        appender.write_all(b"submit rejected\n").unwrap();
        appender.flush().unwrap();

        let written = std::fs::read_to_string(logs.join(LOG_FILE_NAME)).unwrap();
        assert_eq!(written, "submit rejected\n");
    }
}
