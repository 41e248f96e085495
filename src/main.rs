//! LazyTable - an editable, paginated data table for the terminal
//!
//! Runs the people table demo: browse pages, view, open, delete and edit
//! rows inline while saves run in the background.

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use lazytable::app::{App, AppOptions};
use lazytable::config::Config;
use lazytable::demo;
use lazytable::error::AppError;
use lazytable::events::EventHandler;
use lazytable::logging;
use lazytable::tasks::create_task_channel;
use lazytable::ui::init_theme;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "lazytable", version, about)]
struct Args {
    /// Rows per page (overrides the config file).
    #[arg(short = 'n', long)]
    page_size: Option<usize>,

    /// Initial query string, e.g. "?page=2".
    #[arg(short, long)]
    query: Option<String>,

    /// How long the loading skeleton is shown, in milliseconds.
    #[arg(long)]
    loading_ms: Option<u64>,

    /// How long a simulated save takes, in milliseconds.
    #[arg(long)]
    save_ms: Option<u64>,

    /// Path to the configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Puts the terminal in raw mode on the alternate screen until dropped.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging is best-effort; the table works without it.
    let _log_guard = logging::init().ok();

    let (config, config_error) = match load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let mut settings = config.settings;
    if let Some(page_size) = args.page_size {
        settings.items_per_page = page_size.max(1);
    }
    if let Some(loading_ms) = args.loading_ms {
        settings.loading_ms = loading_ms;
    }
    init_theme(&settings.theme);

    let loading_delay = Duration::from_millis(settings.loading_ms);
    let save_latency = args
        .save_ms
        .map(Duration::from_millis)
        .unwrap_or(demo::SAVE_LATENCY);

    let mut app = App::new(AppOptions {
        settings,
        query: args.query,
        save_latency,
    });
    if let Some(err) = config_error {
        app.handle_error(&err);
    }

    let result = run(&mut app, loading_delay).await;
    logging::shutdown();

    if let Err(err) = &result {
        error!(error = %err, "Application exited with an error");
    }
    result
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, AppError> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

async fn run(app: &mut App, loading_delay: Duration) -> anyhow::Result<()> {
    let mut guard = TerminalGuard::new()?;
    let events = EventHandler::default();
    let (mut task_rx, spawner) = create_task_channel();

    spawner.spawn_load(demo::people(), loading_delay);
    info!(?loading_delay, "Event loop started");

    while !app.should_quit() {
        guard.terminal.draw(|frame| app.view(frame))?;

        while let Ok(message) = task_rx.try_recv() {
            app.handle_message(message);
        }
        for pending in app.take_pending_saves() {
            spawner.spawn_save(pending);
        }

        // Polling blocks; keep it off the runtime's worker.
        let event = tokio::task::block_in_place(|| events.next())?;
        app.update(event);
    }

    Ok(())
}
