//! Studio CLI - render and preview the Studio.AI homepage feature grid.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "Render and preview the Studio.AI homepage feature grid")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to studio.toml config file
    #[arg(short, long, default_value = "studio.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default studio.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Render the homepage feature grid
    Render {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the homepage features
    List {
        /// Print the full feature list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build and serve a preview page
    Preview {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Preview directory (defaults to config output dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries rendered markup, logs go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Render { output } => {
            let config = config::load_config(&cli.config)?;
            commands::render::run(&config, output).await?;
        }
        Commands::List { json } => {
            commands::list::run(json).await?;
        }
        Commands::Preview { port, dir, no_open } => {
            let config = config::load_config(&cli.config)?;
            commands::preview::run(&config, port, dir, !no_open).await?;
        }
    }

    Ok(())
}
