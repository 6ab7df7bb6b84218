mod cli;
use cli::{CliMode, USAGE, parse_cli_mode};
mod tui;
use tui::run_tui;

use calgrid::storage::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let options = match parse_cli_mode() {
        Ok(CliMode::Run(options)) => options,
        Ok(CliMode::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    setup_logging();

    let config = Config::load(options.config_path.as_deref())?;
    run_tui(&config, &options)?;

    tracing::info!("calgrid exited");
    Ok(())
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "calgrid.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("calgrid started");
}
