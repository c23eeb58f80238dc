mod commands;
mod logging;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use user_service::{DeskConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV};

use commands::list::ListArgs;

/// Browse and add users from a JSON users endpoint
#[derive(Parser, Debug)]
#[command(name = "userdesk", version, about)]
struct Cli {
    /// Users collection endpoint
    #[arg(long, global = true, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Load users from a local JSON file instead of the endpoint
    #[arg(long, global = true, value_name = "PATH")]
    users_file: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    fn config(&self) -> DeskConfig {
        DeskConfig::resolve(Some(self.endpoint.clone()), self.users_file.clone())
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Open the interactive user list (default)
    Tui,

    /// Print the users as text cards and exit
    List(ListArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let source = cli.config().build_source();

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            logging::init(cli.log_file.as_deref(), true)?;
            userdesk_tui::run(source.as_ref()).await
        }
        Command::List(args) => {
            logging::init(cli.log_file.as_deref(), false)?;
            commands::list::execute(source.as_ref(), args).await
        }
    }
}
