//! `notify-teams` - post a pull request review notification to Teams.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use notify::{Config, Notifier};

/// Send a Microsoft Teams notification for a pull request review.
///
/// All inputs come from the environment; see the crate documentation for
/// the variable list.
#[derive(Parser)]
#[command(name = "notify-teams")]
#[command(about = "Post a pull request review notification to a Teams channel")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("notify=debug,info")
    } else {
        EnvFilter::new("notify=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Fail before any network activity if the webhook URL is missing.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match send(config).await {
        Ok(()) => println!("Successfully sent notification to Teams"),
        Err(e) => {
            eprintln!("Error sending notification to Teams: {e}");
            std::process::exit(1);
        }
    }
}

async fn send(config: Config) -> Result<()> {
    let Config { webhook_url, event } = config;

    tracing::info!(
        repository = %event.repository,
        pr_number = %event.pr_number,
        reviewer = %event.reviewer,
        state = event.state.as_str(),
        "Sending review notification"
    );

    Notifier::new(webhook_url).notify(&event).await?;
    Ok(())
}
