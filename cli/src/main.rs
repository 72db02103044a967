//! CLI entrypoint for Simulacra Debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use simulacra_application::{
    DebateGateway, NoObserver, SessionConfig, SessionController, SessionObserver,
    failure_message,
};
use simulacra_domain::{OutputFormat, TriggerPolicy};
use simulacra_infrastructure::{ApiBase, ConfigLoader, FileConfig, HttpDebateGateway};
use simulacra_presentation::{
    Cli, ConsoleFormatter, ProgressReporter, SimpleProgress, TuiApp, compose,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // The TUI owns the terminal, so its logs go to a file
    let tui_mode = !cli.plain && !cli.health;
    let _log_guard = init_logging(cli.verbose, tui_mode)?;

    info!("Starting Simulacra Debate");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in file_config.validate() {
        warn!("Config: {}", issue);
    }

    let session_config = session_config(&cli, &file_config);
    info!(
        "Session: trigger={}, closing={}, rounds={:?}",
        session_config.trigger, session_config.closing, session_config.max_exchange_rounds
    );

    // === Dependency Injection ===
    let raw_base = cli.api_base.as_deref().unwrap_or(&file_config.api.base_url);
    let base = ApiBase::resolve(Some(raw_base)).context("Invalid API base URL")?;
    let gateway = Arc::new(HttpDebateGateway::new(&base, file_config.api.timeout())?);

    if cli.health {
        return match gateway.health().await {
            Ok(status) => {
                println!("{}: {}", base, status);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => bail!("Debate service at {} is unreachable: {}", base, failure_message(&e)),
        };
    }

    if cli.plain {
        if !file_config.output.color {
            ConsoleFormatter::disable_color();
        }
        let format = file_config.output.format_for(cli.output);
        return Ok(run_plain(gateway, session_config, format, cli.quiet).await);
    }

    let mut app = TuiApp::new(gateway, session_config);
    app.run().await?;

    Ok(ExitCode::SUCCESS)
}

/// Merge file settings with CLI overrides
fn session_config(cli: &Cli, file_config: &FileConfig) -> SessionConfig {
    let (trigger, _) = file_config.session.parse_trigger();
    let (closing, _) = file_config.session.parse_closing();

    SessionConfig::new(cli.trigger_override().unwrap_or(trigger))
        .with_closing(cli.closing.unwrap_or(closing))
        .with_max_exchange_rounds(cli.rounds.or(file_config.max_exchange_rounds()))
}

/// Run one debate and print it. Always runs, whatever the trigger policy.
async fn run_plain(
    gateway: Arc<HttpDebateGateway>,
    config: SessionConfig,
    format: OutputFormat,
    quiet: bool,
) -> ExitCode {
    let observer: Arc<dyn SessionObserver> = if quiet {
        Arc::new(NoObserver)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let (controller, _completions) = SessionController::new(gateway, config);
    let mut controller = controller.with_observer(observer);
    let state = controller.run().await;

    // Console output never shows the placeholder greetings
    let screen = compose(state, TriggerPolicy::Manual, config.closing);
    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format(&screen),
        OutputFormat::Json => ConsoleFormatter::format_json(&screen),
    };
    println!("{}", output);

    if state.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "simulacra-debate.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("simulacra-debate")
        .join("logs")
}
