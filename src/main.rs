mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdesk::Client;
use eventdesk::client::DEFAULT_SERVER_URL;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::commands::form::FieldArgs;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "List, create, edit and delete events on an eventdesk server")]
struct Cli {
    /// Base URL of eventdesk-server
    #[arg(long, global = true, env = "EVENTDESK_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    List,
    /// Show one event in full
    Show { id: String },
    /// Create an event (prompts for fields not given as flags)
    New {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Edit an event (prompts start from the current values)
    Edit {
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Check that the server is up
    Ping,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Only the top-level message; causes are already logged.
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = Client::new(&cli.server);

    match cli.command {
        Commands::List => commands::list::run(&client).await,
        Commands::Show { id } => commands::show::run(&client, &id).await,
        Commands::New { fields } => commands::new::run(&client, fields).await,
        Commands::Edit { id, fields } => commands::edit::run(&client, &id, fields).await,
        Commands::Delete { id, yes } => commands::delete::run(&client, &id, yes).await,
        Commands::Ping => {
            let message = client.ping().await?;
            println!("{}", message.green());
            Ok(())
        }
    }
}
