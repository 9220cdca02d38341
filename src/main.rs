use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, sync::Mutex, time::Duration};

use fitbee::app::App;
use fitbee::config::{find_config_path, Config};
use fitbee::storage::LocalStorage;
use fitbee::{handlers, ui, utils};

/// FitBee - fitness tracker for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging and hydration reminders
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Skip the workout API and use the built-in workout list
    #[arg(long)]
    offline: bool,

    /// Daily water goal in glasses
    #[arg(long, value_name = "GLASSES")]
    water_goal: Option<u32>,
}

/// Send tracing output to the debug log file
///
/// The terminal belongs to the UI, so nothing is ever written to stdout.
fn init_logging() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match find_config_path(args.config.clone())? {
        Some(path) => Config::load(&path)?,
        None => Config::default().normalized(),
    };

    // Override config with CLI flags
    if args.debug {
        config.debug_mode = true;
    }
    if let Some(goal) = args.water_goal.filter(|goal| *goal > 0) {
        config.water_goal = goal;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let config = load_config(&args)?;
    if config.debug_mode {
        init_logging()?;
        tracing::info!(version = %config.app_version, "debug mode enabled");
    }

    let storage_path = config.storage_file();
    tracing::debug!(path = %storage_path.display(), "opening local storage");
    let storage = LocalStorage::open(&storage_path)?;

    // Initialize app
    let mut app = App::new(config, storage, args.offline)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %format!("{:#}", e), "exiting with error");
    }

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            app.shutdown();
            break;
        }

        // Apply finished workout loads without blocking
        app.process_workout_responses();

        app.tick_reminder();

        // Let spawned fetches make progress between frames
        tokio::task::yield_now().await;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
