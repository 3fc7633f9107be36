//! clipwatch CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipwatch::cli::{
    app::{load_merged_config, run_watch, watch_options, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{log_level, Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use clipwatch::domain::config::{AppConfig, OutputFormat};
use clipwatch::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        observe_files: cli.no_files.then_some(false),
        observe_text: cli.no_text.then_some(false),
        observe_images: cli.no_images.then_some(false),
        output: cli.output.map(|o| OutputFormat::from(o).to_string()),
        start_paused: cli.paused.then_some(true),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = match watch_options(&config) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_watch(options).await
}
