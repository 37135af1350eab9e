//! whisper-client CLI entry point

use std::process::ExitCode;

use clap::Parser;

use whisper_client::cli::{
    app::{cli_config, load_merged_config, run_transcribe, transcribe_options},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    EXIT_ERROR, EXIT_USAGE_ERROR,
};
use whisper_client::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    let presenter = Presenter::new();

    if let Err(e) = init_logging(cli.verbose) {
        presenter.error(&format!("Failed to initialize logging: {}", e));
    }

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command.take() {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let Some(file) = cli.file.clone() else {
        presenter.error("Missing audio file. Usage: whisper-client [OPTIONS] <FILE>");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // Merge config: defaults < file < env < cli
    let config = load_merged_config(cli_config(&cli)).await;

    let options = match transcribe_options(config, file, cli.json) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    run_transcribe(options).await
}
