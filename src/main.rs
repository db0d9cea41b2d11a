//! Hearth CLI binary entry point.

use hearth::cli::{Cli, Commands};
use hearth::config::HearthConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    let config = match HearthConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Chat(args) => hearth::cli::chat::handle_chat(args, &config).await,
        Commands::Conversations(args) => {
            hearth::cli::conversations::handle_conversations(args.command, &config)
        }
        Commands::Tasks(args) => hearth::cli::tasks::handle_tasks(args.command, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
