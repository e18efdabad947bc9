//! Terminal front end for two-player tic-tac-toe.
//!
//! Owns one [`GameEngine`](tictactoe_engine::GameEngine) for the life of
//! the process, feeds it keyboard and mouse input, and redraws after
//! every event.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::TuiConfig;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)
        .context("Failed to load configuration")?
        .with_overrides(&cli);

    init_tracing(config.log_file())?;
    info!(
        config = %cli.config.display(),
        config_found = cli.config.exists(),
        reset_policy = %config.reset_policy(),
        "Starting tic-tac-toe"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.reset_policy());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.engine().history().len(), "Shutting down");

    res
}

/// Draw, wait for one event, apply it. Repeats until the user quits.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        let action = match event::read()? {
            Event::Key(key) => input::action_for_key(key),
            Event::Mouse(mouse) => input::action_for_mouse(app.hit_areas(), mouse),
            // Resize and focus events just trigger the redraw above.
            _ => None,
        };

        if let Some(action) = action {
            app.handle(action);
        }
    }

    Ok(())
}

/// Sends tracing output to `log_file` so it never lands on the game screen.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
