//! devport CLI - negotiate a free TCP port for a local dev server.
//!
//! Probes the preferred port and, when it is taken, discloses the
//! occupying process and negotiates a fallback with the operator.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "devport")]
#[command(author, version, about = "Negotiate a free TCP port for a local dev server")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the preferred port, negotiating a fallback when it is taken
    Resolve {
        /// Preferred port; textual values are coerced (e.g. "3000")
        port: String,

        /// Host to probe
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Never offer a fallback port
        #[arg(long)]
        no_fallback: bool,
    },

    /// Show the process currently occupying a port
    Inspect {
        /// Port number to inspect
        port: u16,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            port,
            host,
            no_fallback,
        } => commands::resolve::run(&port, &host, !no_fallback, cli.json).await,
        Commands::Inspect { port } => commands::inspect::run(port, cli.json).await,
    }
}
