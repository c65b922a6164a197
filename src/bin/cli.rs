//! atlas-stats CLI
//!
//! Scrapes the configured Atlas level id range, cross-references Dustkid,
//! and writes the consolidated dataset as JSON and CSV.

use std::path::PathBuf;

use atlas_stats::{error::Result, models::Config, pipeline, sink, utils::http};
use clap::{Parser, Subcommand};

/// Atlas level statistics scraper
#[derive(Parser, Debug)]
#[command(
    name = "atlas-stats",
    version,
    about = "Atlas level scraper with Dustkid cross-referencing"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the configured level range and write both output files
    Run,

    /// Validate the configuration file without touching the network
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(&cli.config)?;
    config.validate()?;

    match cli.command {
        Command::Run => {
            log::info!(
                "scraping levels {}..={}",
                config.range.start,
                config.range.end
            );

            let client = http::create_client(&config.http)?;
            let dataset = pipeline::run(&config, &client)?;
            sink::write_outputs(&dataset, &config.output)?;

            log::info!(
                "wrote {} records to {} and {}",
                dataset.len(),
                config.output.json_file.display(),
                config.output.csv_file.display()
            );
        }

        Command::Validate => {
            log::info!(
                "config OK: levels {}..={}",
                config.range.start,
                config.range.end
            );
            if config.session_credential().is_some() {
                log::info!("session cookie present; a run will verify moderator access");
            } else {
                log::info!("no session cookie; a run will be anonymous");
            }
        }
    }

    Ok(())
}
