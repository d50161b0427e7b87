use std::process::ExitCode;

use clap::Parser;
use lakemap::cli::{self, Cli};
use lakemap::{LakeMapConfig, LakeMapError, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match LakeMapConfig::load_from_path(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.logging, cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match cli::execute(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            match e.downcast_ref::<LakeMapError>() {
                Some(domain) => eprintln!("Error: {}", domain.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
