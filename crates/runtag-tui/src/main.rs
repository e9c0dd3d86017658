//! RunTag Terminal UI.
//!
//! Lists runs with their status tags; resting the pointer on a tag shows the
//! run's statistics in an overlay.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use runtag_client::HttpClient;
use runtag_core::{present, CoreError, PresentationDescriptor, RunStatus};

mod app;
mod backend;
mod config;
mod event;
mod hover;
mod state;
mod ui;

use app::App;
use config::DashboardConfig;
use event::{BackendCommand, UiEvent};
use hover::{HoverEvent, HoverTrigger};

#[derive(Parser)]
#[command(name = "runtag-tui")]
#[command(about = "RunTag Terminal UI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs dashboard - status tags with hover statistics
    #[command(alias = "d")]
    Dashboard {
        /// Run tracker HTTP endpoint
        #[arg(short, long, default_value = config::DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Refresh interval in seconds
        #[arg(short, long, default_value_t = config::DEFAULT_REFRESH_SECS)]
        refresh: u64,

        /// Hover delay before stats are fetched, in milliseconds
        #[arg(long, default_value_t = config::DEFAULT_HOVER_DELAY_MS)]
        hover_delay_ms: u64,

        /// Log file path
        #[arg(long, default_value = config::DEFAULT_LOG_FILE)]
        log_file: PathBuf,
    },

    /// Print how a run status is presented, as JSON
    Describe {
        /// Run status (e.g. STARTED, not_started, Failed)
        status: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard {
            endpoint,
            refresh,
            hover_delay_ms,
            log_file,
        } => {
            let config = DashboardConfig::from_args(endpoint, refresh, hover_delay_ms, log_file);
            init_logging(&config);
            run_dashboard(config)?;
        }
        Commands::Describe { status } => match describe(&status) {
            Ok(descriptor) => println!("{}", serde_json::to_string_pretty(&descriptor)?),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Descriptor for a status named on the command line.
fn describe(status: &str) -> Result<PresentationDescriptor, CoreError> {
    status.parse::<RunStatus>().map(present)
}

/// Log to a file so output does not interfere with the terminal UI.
fn init_logging(config: &DashboardConfig) {
    let log_file = std::fs::File::create(&config.log_file).ok();
    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("runtag_tui=debug,runtag_client=debug"));
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter(filter)
            .with_ansi(false)
            .init();
    }
}

fn run_dashboard(config: DashboardConfig) -> Result<(), Box<dyn Error>> {
    info!(
        endpoint = %config.endpoint,
        refresh = ?config.refresh,
        hover_delay = ?config.hover_delay,
        "Starting dashboard"
    );

    let runtime = tokio::runtime::Runtime::new()?;

    // Channels for UI <-> background communication
    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>(100);
    let (cmd_tx, cmd_rx) = mpsc::channel::<BackendCommand>(100);
    let (hover_tx, hover_rx) = mpsc::channel::<HoverEvent>(16);

    let client = HttpClient::new(&config.endpoint);
    let backend = runtime.spawn(backend::run_backend(
        client.clone(),
        config.refresh,
        ui_tx,
        cmd_rx,
    ));
    let hover = HoverTrigger::new(
        Arc::new(client),
        config.hover_delay,
        runtime.handle().clone(),
        hover_tx,
    );

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }

    // Run UI loop on main thread
    let mut app = App::new(hover, ui_rx, hover_rx, cmd_tx);
    let result = app.run(terminal);

    // Restore terminal (exits alternate screen, disables raw mode)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    drop(app);
    let _ = runtime.block_on(backend);
    runtime.shutdown_timeout(Duration::from_secs(1));

    info!("TUI shutdown complete");

    result.map_err(|e| e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use runtag_core::Intent;

    #[test]
    fn test_describe_known_status() {
        let descriptor = describe("not_started").unwrap();
        assert_eq!(descriptor.label, "Not started");
        assert_eq!(descriptor.intent, Intent::Neutral);
    }

    #[test]
    fn test_describe_unknown_status_message() {
        let err = describe("CANCELED").unwrap_err();
        assert_eq!(err.to_string(), "Unknown run status: 'CANCELED'");
    }

    #[test]
    fn test_cli_parses_describe() {
        let cli = Cli::try_parse_from(["runtag-tui", "describe", "STARTED"]).unwrap();
        assert!(matches!(cli.command, Commands::Describe { status } if status == "STARTED"));
    }

    #[test]
    fn test_cli_dashboard_defaults() {
        let cli = Cli::try_parse_from(["runtag-tui", "dashboard"]).unwrap();
        let Commands::Dashboard {
            endpoint,
            refresh,
            hover_delay_ms,
            ..
        } = cli.command
        else {
            panic!("expected dashboard command");
        };
        assert_eq!(endpoint, config::DEFAULT_ENDPOINT);
        assert_eq!(refresh, config::DEFAULT_REFRESH_SECS);
        assert_eq!(hover_delay_ms, config::DEFAULT_HOVER_DELAY_MS);
    }
}
