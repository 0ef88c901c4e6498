//! slide-tui - Terminal slide viewer for Slidecast
//!
//! Presents a deck one slide at a time with keyboard and mouse navigation
//! and a progress bar.

use std::path::PathBuf;

use clap::Parser;
use libslidecast::logging::{self, LogTarget};
use libslidecast::{Config, Deck};
use tracing::{debug, info};

use slide_tui::{
    error::Result,
    app::{apply_start, AppState, UiConfig, reduce, event::EventHandler, Action},
    terminal::{install_panic_hook, restore_terminal, set_mouse_capture, setup_terminal, Tui},
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "slide-tui")]
#[command(version, about = "Present a slide deck in the terminal", long_about = None)]
struct Cli {
    /// Deck file to present (defaults to the built-in deck)
    #[arg(short, long, value_name = "PATH")]
    deck: Option<PathBuf>,

    /// Configuration file (defaults to $SLIDECAST_CONFIG or the XDG config dir)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Slide to open first, 1-based; out-of-range values are ignored
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    start: Option<i64>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Write logs to this file (the terminal is used for drawing)
    #[arg(long, value_name = "PATH", env = "SLIDECAST_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log_file {
        let config = logging::config_from_env(cli.verbose).with_target(LogTarget::File(path.clone()));
        if let Err(e) = config.init() {
            eprintln!("Error: cannot open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?.with_env_overrides(),
        None => Config::load()?,
    };
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    let deck_path = cli.deck.or_else(|| config.deck_path());
    let deck = Deck::load(deck_path.as_deref())?;
    info!(title = %deck.title(), slides = deck.len(), "presenting deck");

    let state = AppState::with_config(deck, UiConfig::from(config.ui));
    let state = apply_start(state, cli.start);

    // Restore the terminal even if rendering panics
    install_panic_hook();

    let mut terminal = setup_terminal(state.mouse_enabled)?;
    let result = run_app(&mut terminal, state);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    let size = terminal.size()?;
    state = reduce(state, Action::Resize(size.width, size.height));

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();

        let index_before = state.presentation.index();
        let mouse_before = state.mouse_enabled;

        state = reduce(state, action);

        if state.presentation.index() != index_before {
            debug!(
                index = state.presentation.index(),
                progress = state.progress(),
                "slide changed"
            );
        }

        if state.mouse_enabled != mouse_before {
            set_mouse_capture(terminal, state.mouse_enabled)?;
            debug!(enabled = state.mouse_enabled, "mouse capture toggled");
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
