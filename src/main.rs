// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use survivor_pool::commands;
use survivor_pool::config::Config;
use survivor_pool::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration operations before logging setup; they print to
    // stdout and exit.
    if args.is_config_operation() {
        if args.list_config {
            Config::display().await?;
            return Ok(());
        }

        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_domain) = args.new_api_domain {
            config.api_domain = new_domain;
        }
        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.validate()?;
        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = run_command(&args).await;

    // Domain rejections are expected outcomes; report them plainly rather
    // than as a failed process with a debug dump.
    if let Err(e) = &result {
        if e.is_rejection() {
            eprintln!("Rejected: {e}");
            return Ok(());
        }
    }
    result
}

async fn run_command(args: &Args) -> Result<(), AppError> {
    if args.standings {
        return commands::show_standings(&args.file).await;
    }

    if let Some(teams_csv) = &args.submit {
        let entry_id = args.entry.as_deref().ok_or_else(|| {
            AppError::config_error("--submit requires --entry")
        })?;
        let week = args
            .week
            .ok_or_else(|| AppError::config_error("--submit requires --week"))?;
        return commands::submit_picks(&args.file, entry_id, week, teams_csv).await;
    }

    if args.fetch_week {
        let week = args
            .week
            .ok_or_else(|| AppError::config_error("--fetch-week requires --week"))?;
        let config = Config::load().await?;
        return commands::fetch_week(&args.file, week, &config).await;
    }

    if args.apply_results {
        let week = args
            .week
            .ok_or_else(|| AppError::config_error("--apply-results requires --week"))?;
        return commands::apply_results(&args.file, week).await;
    }

    // Standings is the default action when nothing else was requested.
    commands::show_standings(&args.file).await
}
