// Listing Gallery
// TUI application for browsing property listings and contacting the agent

// MODULES ------------------>>

mod config;
mod config_validation;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

use config::default_config_path;
use config_validation::load_and_validate_config;
use listing_gallery::core::{App, AppConfig, Catalog};
use listing_gallery::operations::{CommandOpener, SimulatedSubmitter, TaskRunner};
use listing_gallery::ui::run_app;

//--------------------------------------------------------<<

const LOG_ENV: &str = "LISTING_GALLERY_LOG";

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .worker_threads(2)
        .build()
        .context("Failed to start async runtime")?;

    // Load and validate configuration from YAML file
    let config = load_and_validate_config(&default_config_path());
    let catalog = load_catalog(&config);
    tracing::info!(listings = catalog.len(), "Catalog loaded");

    let submitter = SimulatedSubmitter::new(
        config.timing.submit_delay,
        config.defaults.submit_behavior(),
    );
    let (runner, outcomes) = TaskRunner::new(
        runtime.handle().clone(),
        config.timing.launch_delays(),
        Arc::new(submitter),
    );
    let opener = CommandOpener::new(config.defaults.open_command());
    let mouse_enabled = config.ui.mouse_enabled;

    let mut app = App::new(config, catalog, runner, outcomes, Box::new(opener));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = ?err, "Application exited with error");
    }
    runtime.shutdown_background();
    result
}

/// Log to a file; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let path = match std::env::var_os(LOG_ENV) {
        Some(path) => PathBuf::from(path),
        None => dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("listing-gallery")
            .join("listing-gallery.log"),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("listing_gallery=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Catalog file from the config, falling back to the built-in listings
fn load_catalog(config: &AppConfig) -> Catalog {
    let Some(path) = &config.catalog_path else {
        return Catalog::builtin();
    };
    match Catalog::load(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "Failed to load catalog, using built-in listings");
            Catalog::builtin()
        }
    }
}
