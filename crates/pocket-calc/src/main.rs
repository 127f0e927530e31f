//! pocket-calc: terminal calculator
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                          # Interactive keypad calculator
//! pocket-calc keys 7 + 5 Enter         # Replay keys, print the result
//! pocket-calc keys "12.5*2=" --json    # Same, as JSON
//! pocket-calc --config calc.json       # Custom history size / error policy
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_calc::config::{CalculatorConfig, ConfigError};
use pocket_calc::core::Accumulator;
use pocket_calc::keymap::{parse_sequence, UnknownKey};
use pocket_calc::tui::{keypad_area, render, CalculatorApp, InputHandler};
use pocket_calc::view::Snapshot;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// How long the display pulse and key highlight stay visible
const TICK: Duration = Duration::from_millis(300);

/// Button and keyboard calculator
#[derive(Debug, Parser)]
#[command(name = "pocket-calc", version, about)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true, env = "POCKET_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `pocket_calc=trace` (default: RUST_LOG, else `warn`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to this file (the terminal UI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Feed a key sequence and print display, pending line and history
    Keys {
        /// Key names (`7`, `+`, `Enter`, `Escape`, `sqrt`, `m-plus`, ...);
        /// unknown tokens are split into single keys. Tokens starting with
        /// `-` (other than a lone `-`) go after `--`
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Errors surfaced by the binary
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let interactive = cli.command.is_none();
    init_logging(
        cli.log_level.as_deref(),
        cli.log_file.as_deref(),
        !interactive,
    )?;

    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    debug!(?config, "configuration");

    match cli.command {
        Some(Commands::Keys { keys, json }) => run_keys(&config, &keys.join(" "), json),
        None => run_tui(&config),
    }
}

/// Installs the tracing subscriber; stays silent when there is nowhere to write
fn init_logging(level: Option<&str>, file: Option<&Path>, stderr: bool) -> CliResult<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).map_err(|e| CliError::LogFilter(e.to_string()))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    if let Some(path) = file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }
    Ok(())
}

fn run_keys(config: &CalculatorConfig, keys: &str, json: bool) -> CliResult<()> {
    let mut calc = Accumulator::with_config(config);
    for event in parse_sequence(keys)? {
        calc.handle(event);
    }

    let snapshot = Snapshot::of(&calc);
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", snapshot.display);
    if !snapshot.pending.is_empty() {
        println!("pending: {}", snapshot.pending);
    }
    if snapshot.memory {
        println!("memory: {}", pocket_calc::core::format_number(calc.memory().value()));
    }
    for line in &snapshot.history {
        println!("  {line}");
    }
    Ok(())
}

fn run_tui(config: &CalculatorConfig) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, CalculatorApp::with_config(config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> CliResult<()> {
    let input_handler = InputHandler::new();
    info!("terminal calculator started");

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        if !event::poll(TICK)? {
            app.tick();
            continue;
        }

        match event::read()? {
            TermEvent::Key(key) => app.handle_action(input_handler.handle_key(key)),
            TermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = keypad_area(Rect::new(0, 0, size.width, size.height));
                if let Some(event) = app.keypad().event_at(area, mouse.column, mouse.row) {
                    app.handle_event(event);
                }
            }
            _ => {}
        }
    }

    info!("terminal calculator stopped");
    Ok(())
}
