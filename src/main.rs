use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// portfolio - personal portfolio contact tooling
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Send messages through the portfolio contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the contact form and submit it once
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Intake base URL (overrides config file)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Contact {
            name,
            email,
            subject,
            message,
            endpoint,
        } => {
            cli::contact::send(
                config,
                cli::contact::ContactArgs {
                    name,
                    email,
                    subject,
                    message,
                    endpoint,
                },
            )
            .await
        }
    }
}
