//! dexsync - PokeAPI to Notion sync

use anyhow::Result;
use clap::Parser;
use dexsync_common::logging::{init_logging, LogConfig, LogLevel};
use dexsync_ingest::config::SyncConfig;
use dexsync_ingest::notion::{DryRunDestination, NotionClient};
use dexsync_ingest::pipeline::{SyncPipeline, SyncSummary, TokioThrottle};
use dexsync_ingest::pokeapi::PokeApiClient;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "dexsync")]
#[command(author, version, about = "Publish the PokeAPI catalog as pages of a Notion database")]
struct Cli {
    /// First national-dex number to sync (overrides DEXSYNC_START_ID)
    #[arg(long)]
    start: Option<u32>,

    /// Last national-dex number to sync, inclusive (overrides DEXSYNC_END_ID)
    #[arg(long)]
    end: Option<u32>,

    /// Pause before each page creation in milliseconds (overrides DEXSYNC_PUBLISH_DELAY_MS)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log page documents instead of sending them to Notion
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, config: &mut SyncConfig) {
        if let Some(start) = self.start {
            config.start_id = start;
        }
        if let Some(end) = self.end {
            config.end_id = end;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.publish_delay_ms = delay_ms;
        }
    }
}

async fn run(cli: &Cli, config: SyncConfig) -> Result<SyncSummary> {
    let source = PokeApiClient::from_config(&config)?;

    let summary = if cli.dry_run {
        let database_id = config.database_id.clone().unwrap_or_else(|| "dry-run".to_string());
        SyncPipeline::new(source, DryRunDestination::new(), TokioThrottle, config, database_id)
            .run()
            .await?
    } else {
        let destination = NotionClient::from_config(&config)?;
        let database_id = config.notion_credentials()?.1.to_string();
        SyncPipeline::new(source, destination, TokioThrottle, config, database_id)
            .run()
            .await?
    };

    Ok(summary)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    // LOG_* variables take precedence over the flag
    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("dexsync")
        .build()
        .merge_env()?;
    let _log_guard = init_logging(&log_config)?;

    let mut config = SyncConfig::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    let summary = run(&cli, config).await?;

    if !summary.publish.is_success() {
        error!(failed = ?summary.publish.failed, "Some pages were not created");
        anyhow::bail!(
            "{} of {} pages failed to publish",
            summary.publish.failed.len(),
            summary.fetched
        );
    }

    info!(created = summary.publish.created, "Sync finished");
    Ok(())
}
