mod commands;
mod report;
mod sink;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pagescope_core::config::DEFAULT_OUTPUT_PATH;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pagescope")]
#[command(about = "Contact-signal audit for managed Facebook pages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect records for every managed page and write them to disk
    Collect {
        /// Number of recent posts to scan per page (overrides config)
        #[arg(long)]
        post_limit: Option<u32>,

        /// Where to write the JSON record file (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Render the report without writing the record file
        #[arg(long)]
        dry_run: bool,
    },
    /// Look up a single page by ID or username and render its record
    Page {
        /// Page ID or username to look up
        page_id: String,

        /// Number of recent posts to scan (overrides config)
        #[arg(long)]
        post_limit: Option<u32>,

        /// Also write the record to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render a previously collected record file
    Report {
        /// Record file to read
        #[arg(long, env = "PAGESCOPE_OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Only the commands that talk to the Graph API load configuration.
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Collect { post_limit, output, dry_run }) => {
            let config = pagescope_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            commands::run_collect(&config, post_limit, output.as_deref(), dry_run).await?;
        }
        Some(Commands::Page { page_id, post_limit, output }) => {
            let config = pagescope_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            commands::run_page(&config, &page_id, post_limit, output.as_deref()).await?;
        }
        Some(Commands::Report { input }) => {
            init_tracing("info")?;
            commands::run_report(&input)?;
        }
        None => println!("no command given; run `pagescope collect` to audit all managed pages"),
    }

    Ok(())
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
