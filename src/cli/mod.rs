use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod init;
pub mod migrate;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Create the database schema
    Init {},
    /// Apply pending database migrations
    Migrate {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port, defaults to $PORT or 5000
        #[arg(long)]
        port: Option<String>,
    },
    /// Start an interactive chat session against a running server
    Chat {
        /// Base URL of the chat API, defaults to $CHATBOX_API_BASE_URL
        /// or http://localhost:5000
        #[arg(long)]
        api_url: Option<String>,

        /// File holding this client's user id
        #[arg(long)]
        user_file: Option<PathBuf>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            let config = AppConfig::default();
            init::run(&config.db_path).await?;
        }
        Some(Command::Migrate {}) => {
            let config = AppConfig::default();
            migrate::run(&config.db_path).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Chat { api_url, user_file }) => {
            let api_url = api_url
                .or_else(|| env::var("CHATBOX_API_BASE_URL").ok())
                .unwrap_or_else(|| "http://localhost:5000".to_string());
            chat::run(&api_url, user_file).await?;
        }
        None => {}
    }

    Ok(())
}
