use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;
mod session;
mod stores;
mod templates;

use cli::{Cli, Commands, DocsCommand, UserCommand};
use output::OutputFormat;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("folio=info".parse()?)
                .add_directive("folio_bin=info".parse()?),
        )
        .init();

    let format = OutputFormat::from_json_flag(cli.json);

    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::run(&args).await,
        Some(Commands::Health(args)) => commands::health::run(&args).await,
        Some(Commands::Info(args)) => commands::info::run(&args, format).await,
        Some(Commands::Docs(DocsCommand::List(args))) => commands::docs::list(&args, format).await,
        Some(Commands::User(UserCommand::Add(args))) => commands::user::add(&args).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
