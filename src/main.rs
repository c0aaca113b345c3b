use clap::Parser;
use clubdesk::cli::{Cli, run};
use clubdesk_config::AppConfig;
use clubdesk_observability::{LogFormat, init_console_logging};
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    dotenv().ok();
    init_console_logging(LogFormat::from_env());

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let today = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    debug!(%today, boundary = ?config.batch.boundary_month, "Evaluating");

    match run(&cli.command, &config, today) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
