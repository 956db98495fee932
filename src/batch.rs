//! Concurrent fetch-and-parse across many zones.
//!
//! Zones are fetched with bounded concurrency and parsed as soon as their
//! text arrives. A failed zone is recorded in the report and never aborts
//! the rest of the batch.

use crate::config::ForecastConfig;
use crate::constants::{ZONES, zone_display_name};
use crate::error::{ForecastError, Result};
use crate::fetcher::ZoneFetcher;
use crate::models::{BatchReport, ZoneOutcome};
use crate::parser::BulletinParser;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{info, warn};

/// Runs fetch-and-parse for a list of zones
#[derive(Debug, Clone)]
pub struct BatchRunner {
    fetcher: ZoneFetcher,
    parser: BulletinParser,
}

impl BatchRunner {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        Ok(Self {
            fetcher: ZoneFetcher::new(config)?,
            parser: BulletinParser::new(),
        })
    }

    /// Use a specific parser, e.g. one with a fixed clock
    pub fn with_parser(mut self, parser: BulletinParser) -> Self {
        self.parser = parser;
        self
    }

    /// Fetch and parse every zone, returning outcomes in request order
    pub async fn run(&self, zones: &[String]) -> BatchReport {
        let start_time = Instant::now();
        let config = self.fetcher.config();

        let progress_bar = config.show_progress.then(|| {
            let pb = ProgressBar::new(zones.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        });

        info!(
            "Fetching {} zones with up to {} concurrent requests",
            zones.len(),
            config.max_concurrent_fetches
        );

        let outcomes: Vec<ZoneOutcome> = stream::iter(zones)
            .map(|zone| {
                let progress_bar = progress_bar.as_ref();
                async move {
                    let result = self.fetcher.fetch_forecast(zone, &self.parser).await;
                    if let Err(e) = &result {
                        warn!("Zone {} unavailable: {}", zone, e);
                    }
                    if let Some(pb) = progress_bar {
                        pb.set_message(zone.to_uppercase());
                        pb.inc(1);
                    }
                    ZoneOutcome {
                        zone: zone.to_uppercase(),
                        result,
                    }
                }
            })
            .buffered(config.max_concurrent_fetches)
            .collect()
            .await;

        if let Some(pb) = &progress_bar {
            pb.finish_with_message("Fetch complete");
        }

        let report = BatchReport {
            outcomes,
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        info!(
            "Batch complete: {} succeeded, {} transiently unavailable, {} failed",
            report.succeeded(),
            report.transiently_unavailable(),
            report.hard_failed()
        );

        report
    }
}

/// Validate requested zones against the catalogue
///
/// With `all` set, every catalogued zone is returned and `requested` is
/// ignored. Codes come back lowercased and deduplicated in request order.
pub fn resolve_zones(requested: &[String], all: bool) -> Result<Vec<String>> {
    if all {
        return Ok(ZONES.iter().map(|(code, _)| code.to_string()).collect());
    }

    let mut zones: Vec<String> = Vec::with_capacity(requested.len());
    for zone in requested {
        let code = zone.trim().to_ascii_lowercase();
        if zone_display_name(&code).is_none() {
            return Err(ForecastError::UnknownZone { zone: zone.clone() });
        }
        if !zones.contains(&code) {
            zones.push(code);
        }
    }

    if zones.is_empty() {
        return Err(ForecastError::Configuration {
            message: "no zones requested; pass zone codes or --all".to_string(),
        });
    }

    Ok(zones)
}
