//! Command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Count sub-breeds using the in-memory table (default: hound, cat)
//! cargo run
//!
//! # Ask dog.ceo, listing the sub-breed names too
//! cargo run -- --source remote --list hound terrier hound
//! ```
//!
//! # Environment Variables
//!
//! See [`dog_breeds::config`]. `--source` overrides `BREED_SOURCE`.

use dog_breeds::config::{self, BreedSource, Config};
use dog_breeds::runner;

use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

/// Look up dog sub-breeds through a caching client.
#[derive(Parser)]
#[command(name = "dog-breeds")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Breeds to look up
    #[arg(default_values_t = ["hound".to_string(), "cat".to_string()])]
    breeds: Vec<String>,

    /// Sub-breed source (overrides BREED_SOURCE)
    #[arg(short, long, value_enum)]
    source: Option<BreedSource>,

    /// Print the sub-breed names, not just their count
    #[arg(short, long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(source) = cli.source {
        config.source = source;
    }

    init_tracing(&config);
    config.print_summary();

    let summary = runner::run(&config, &cli.breeds).await?;

    for report in &summary.reports {
        println!(
            "{} has {} sub breeds",
            report.breed.bold(),
            report.count().to_string().green()
        );
        if cli.list {
            for name in &report.sub_breeds {
                println!("  - {}", name);
            }
        }
    }

    println!(
        "{}",
        format!("Calls to the breed source: {}", summary.calls_made).dimmed()
    );

    Ok(())
}

/// Installs the global subscriber, text or JSON per `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
