use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use qaplan::cli::{Cli, Commands, ConfigAction};
use qaplan::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_decode, cmd_encode, cmd_report,
};

fn init_logging() {
    let filter = EnvFilter::try_from_env("QAPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode { file } => cmd_encode(file.as_deref()),
        Commands::Decode { file, strict } => cmd_decode(file.as_deref(), strict),
        Commands::Report { file, json } => cmd_report(file.as_deref(), json),

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
