mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = commands::load::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search { query, files, json } => {
            commands::search::run(config, &query, &files, json)
        }
        Commands::Summarize { file } => commands::summarize::run(config, &file),
        Commands::Keywords { file, top } => commands::keywords::run(config, &file, top),
        Commands::Notes { file, output } => commands::notes::run(config, &file, output.as_deref()),
        Commands::Shell { files } => commands::shell::run(config, &files),
        Commands::Version => commands::version::run(&config),
    }
}
