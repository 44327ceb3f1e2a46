//! Sync pipeline
//!
//! Three stages run strictly one after another, each over the complete
//! output of the previous one:
//!
//! 1. [`fetch_primary_records`]: one `/pokemon/{id}` request per id in the
//!    configured range; failures drop the id.
//! 2. [`enrich_records`]: one `/pokemon-species/{id}` request per record;
//!    failures leave the record un-enriched.
//! 3. [`publish_records`]: one page per record, each preceded by the
//!    configured delay; failures are counted and the stage carries on.
//!
//! The record collection is passed between stages by value. Within a stage
//! exactly one request is in flight at a time, so records stay in ascending
//! id order and the destination never sees more than one request per delay.

use crate::config::SyncConfig;
use crate::error::Result;
use crate::model::{Enrichment, Pokemon};
use crate::notion::{Destination, PageRequest};
use crate::pokeapi::PokedexSource;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::future::Future;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Pause applied before every publish call.
pub trait Throttle {
    fn wait(&self, delay: Duration) -> impl Future<Output = ()> + Send;
}

/// Real-time throttle backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioThrottle;

impl Throttle for TokioThrottle {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Outcome of the publish stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub created: usize,
    /// National-dex numbers whose page could not be created
    pub failed: Vec<u32>,
}

impl PublishReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Counts for a whole run
#[derive(Debug, Clone, Serialize)]
pub struct SyncSummary {
    pub requested: usize,
    pub fetched: usize,
    pub enriched: usize,
    pub publish: PublishReport,
    pub elapsed: Duration,
}

fn stage_progress(len: usize, message: &'static str) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{msg} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");

    let bar = ProgressBar::new(len as u64);
    bar.set_style(style);
    bar.set_message(message);
    bar
}

/// Number of ids in `ids` without walking the range.
fn range_len(ids: &RangeInclusive<u32>) -> usize {
    if ids.is_empty() {
        0
    } else {
        (*ids.end() - *ids.start()) as usize + 1
    }
}

async fn fetch_one<S: PokedexSource>(
    source: &S,
    id: u32,
    bulbapedia_base_url: &str,
) -> Result<Pokemon> {
    let response = source.fetch_pokemon(id).await?;
    Pokemon::from_response(response, bulbapedia_base_url)
}

/// Stage 1: fetch and normalize every id in `ids`, in order.
///
/// The returned records are in ascending id order; ids that failed for any
/// reason are absent.
pub async fn fetch_primary_records<S: PokedexSource>(
    source: &S,
    ids: RangeInclusive<u32>,
    bulbapedia_base_url: &str,
) -> Vec<Pokemon> {
    let requested = range_len(&ids);
    let progress = stage_progress(requested, "Fetching pokemon");
    // No capacity hint: the range comes from user configuration.
    let mut records = Vec::new();

    for id in ids {
        match fetch_one(source, id, bulbapedia_base_url).await {
            Ok(pokemon) => {
                debug!(number = id, name = %pokemon.name, "Fetched pokemon");
                records.push(pokemon);
            },
            Err(e) => {
                error!(number = id, error = %e, "Failed to fetch pokemon");
            },
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    info!(requested, fetched = records.len(), "Primary fetch complete");
    records
}

/// Stage 2: attach species data to every record, in order.
///
/// Records whose species lookup fails are returned unchanged.
pub async fn enrich_records<S: PokedexSource>(source: &S, mut records: Vec<Pokemon>) -> Vec<Pokemon> {
    let progress = stage_progress(records.len(), "Fetching species");
    let mut enriched = 0usize;

    for pokemon in records.iter_mut() {
        let number = pokemon.number;
        let result = match source.fetch_species(number).await {
            Ok(species) => Enrichment::from_species(number, &species),
            Err(e) => Err(e),
        };

        match result {
            Ok(enrichment) => {
                if pokemon.enrich(enrichment) {
                    enriched += 1;
                } else {
                    warn!(number, name = %pokemon.name, "Pokemon already enriched, keeping existing data");
                }
            },
            Err(e) => {
                error!(number, name = %pokemon.name, error = %e, "Failed to enrich pokemon");
            },
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    info!(records = records.len(), enriched, "Enrichment complete");
    records
}

/// Stage 3: create one page per record, waiting `delay` before each call.
pub async fn publish_records<D, T>(
    destination: &D,
    throttle: &T,
    delay: Duration,
    database_id: &str,
    records: Vec<Pokemon>,
) -> PublishReport
where
    D: Destination,
    T: Throttle,
{
    let progress = stage_progress(records.len(), "Publishing pages");
    let mut report = PublishReport::default();

    for pokemon in &records {
        throttle.wait(delay).await;

        let page = PageRequest::for_pokemon(pokemon, database_id);
        match destination.create_page(&page).await {
            Ok(created) => {
                report.created += 1;
                info!(
                    number = pokemon.number,
                    name = %pokemon.name,
                    page_id = %created.id,
                    "Created page"
                );
            },
            Err(e) => {
                report.failed.push(pokemon.number);
                error!(
                    number = pokemon.number,
                    name = %pokemon.name,
                    destination = D::name(),
                    error = %e,
                    "Failed to create page"
                );
            },
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    report
}

/// Runs the three stages against one source, destination and throttle.
pub struct SyncPipeline<S, D, T> {
    source: S,
    destination: D,
    throttle: T,
    config: SyncConfig,
    database_id: String,
}

impl<S, D, T> SyncPipeline<S, D, T>
where
    S: PokedexSource,
    D: Destination,
    T: Throttle,
{
    pub fn new(
        source: S,
        destination: D,
        throttle: T,
        config: SyncConfig,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            source,
            destination,
            throttle,
            config,
            database_id: database_id.into(),
        }
    }

    /// Run all stages. Per-record failures are logged and counted; only an
    /// invalid configuration makes the run itself fail.
    pub async fn run(&self) -> Result<SyncSummary> {
        self.config.validate()?;
        let started = Instant::now();

        info!(
            start = self.config.start_id,
            end = self.config.end_id,
            destination = D::name(),
            "Starting sync"
        );

        let requested = range_len(&self.config.ids());
        let records = fetch_primary_records(
            &self.source,
            self.config.ids(),
            &self.config.bulbapedia_base_url,
        )
        .await;
        let fetched = records.len();

        let records = enrich_records(&self.source, records).await;
        let enriched = records.iter().filter(|p| p.enrichment.is_some()).count();

        let publish = publish_records(
            &self.destination,
            &self.throttle,
            self.config.publish_delay(),
            &self.database_id,
            records,
        )
        .await;

        let summary = SyncSummary {
            requested,
            fetched,
            enriched,
            publish,
            elapsed: started.elapsed(),
        };

        info!(
            requested = summary.requested,
            fetched = summary.fetched,
            enriched = summary.enriched,
            created = summary.publish.created,
            failed = summary.publish.failed.len(),
            elapsed_secs = summary.elapsed.as_secs_f64(),
            "Operation complete"
        );

        Ok(summary)
    }
}
