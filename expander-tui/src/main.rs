mod app;
mod config;
mod error;
mod paths;
mod terminal;
mod view;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::WriteLogger;

use crate::app::App;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::terminal::Terminal;

/// Single-selection expandable list in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file to load instead of the platform default.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Finish every expand and collapse immediately.
    #[arg(long)]
    reduced_motion: bool,

    /// Write the log here instead of the cache directory.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(config: &AppConfig, log_file: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let path = match log_file {
        Some(path) => path,
        None => {
            paths::rotate_logs();
            paths::log_file().unwrap_or_else(|| PathBuf::from(paths::FALLBACK_LOG_FILE))
        }
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(&path)?;
    WriteLogger::init(config.level(), simplelog::Config::default(), file)?;
    Ok(path)
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    config.reduced_motion |= args.reduced_motion;

    let log_path = init_logging(&config, args.log_file)?;
    log::info!("logging to {}", log_path.display());
    log::debug!("config: {:?}", config);

    let mut terminal = Terminal::new()?;
    App::new(&config).run(&mut terminal)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
