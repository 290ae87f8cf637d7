//! Patternbook - pattern catalog browser and tutorial walker

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use patternbook::cli::commands::{
    gallery::GalleryCommand, open::OpenCommand, show::ShowCommand, walk::WalkCommand,
    CommandContext, CommandHandler, CommandResult,
};
use patternbook::cli::{Cli, Commands, LogLevel};

/// Initialize tracing from `--log-level`, letting `RUST_LOG` take precedence
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries command output
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let context = CommandContext::resolve(cli.data.as_deref(), cli.config.as_ref())?;
    tracing::debug!(
        command = cli.command.name(),
        interactive = cli.command.is_interactive(),
        "Starting"
    );

    let result = match cli.command {
        Commands::Gallery {
            query,
            fields,
            json,
        } => GalleryCommand::new(context, query, fields, json).execute().await?,
        Commands::Show { id, json } => ShowCommand::new(context, id, json).execute().await?,
        Commands::Walk { id, plain, json } => {
            WalkCommand::new(context, id, plain, json).execute().await?
        }
        Commands::Open { location, json } => {
            OpenCommand::new(context, location, json).execute().await?
        }
        #[cfg(feature = "tui")]
        Commands::Browse => {
            let view = match context.session().open(&patternbook::Selection::All).await {
                patternbook::PageState::Gallery(view) => view,
                other => {
                    let message = patternbook::cli::commands::open::state_message(&other);
                    report(&CommandResult::Error(message));
                    std::process::exit(1);
                }
            };
            patternbook::cli::tui::run_browser(view).await?;
            CommandResult::Success(None)
        }
    };

    report(&result);
    if result.exit_code() != 0 {
        std::process::exit(result.exit_code());
    }

    Ok(())
}

fn report(result: &CommandResult) {
    match result {
        CommandResult::Success(Some(message)) => println!("{message}"),
        CommandResult::Success(None) => {}
        CommandResult::Warning(message) | CommandResult::Error(message) => {
            eprintln!("{message}")
        }
    }
}
