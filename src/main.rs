//! CLI entry point for voyage

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "voyage")]
#[command(version)]
#[command(about = "A blog front-end for headless CMS content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the blog over HTTP
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List posts from the content repository
    List {
        /// Follow pagination cursors until the repository is exhausted
        #[arg(short, long)]
        all: bool,
    },

    /// Show a single post by its uid
    Show {
        /// The post uid
        uid: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "voyage=debug,info"
    } else {
        "voyage=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Serve { port, ip } => {
            let voyage = voyage::Voyage::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            voyage::server::start(&voyage, &ip, port).await?;
        }

        Commands::List { all } => {
            let voyage = voyage::Voyage::new(&base_dir)?;
            voyage::commands::list::run(&voyage, all).await?;
        }

        Commands::Show { uid } => {
            let voyage = voyage::Voyage::new(&base_dir)?;
            voyage::commands::show::run(&voyage, &uid).await?;
        }

        Commands::Version => {
            println!("voyage version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
