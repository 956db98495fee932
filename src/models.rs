//! Core data structures for parsed marine forecasts.
//!
//! Defines the header extracted from a bulletin, the per-period forecast
//! record, the assembled zone forecast, and batch reporting types.

use crate::error::FetchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw metadata pulled from a bulletin's header block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneHeader {
    pub zone_code: String,
    /// `DDHHMM` expiration code, or the fallback sentinel
    pub expires_code: String,
    pub zone_name: String,
    pub issued_raw: String,
}

/// One named forecast interval within a bulletin (e.g. TONIGHT, WED)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    pub wind: String,
    pub waves: String,
    pub weather: Option<String>,
}

/// Structured forecast for a single zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarineForecast {
    pub zone: String,
    pub name: String,
    pub issued: DateTime<Utc>,
    pub expires: DateTime<Utc>,
    pub periods: Vec<ForecastPeriod>,
}

impl MarineForecast {
    /// Look up a period by name, ignoring case
    pub fn period(&self, name: &str) -> Option<&ForecastPeriod> {
        self.periods
            .iter()
            .find(|period| period.name.eq_ignore_ascii_case(name))
    }
}

/// Result of fetching and parsing a single zone in a batch
#[derive(Debug)]
pub struct ZoneOutcome {
    pub zone: String,
    pub result: std::result::Result<MarineForecast, FetchError>,
}

/// Aggregated results of a multi-zone run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Outcomes in the order the zones were requested
    pub outcomes: Vec<ZoneOutcome>,
    pub processing_time_ms: u128,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Zones whose failure is worth retrying later
    pub fn transiently_unavailable(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Err(e) if e.is_transient()))
            .count()
    }

    pub fn hard_failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Err(e) if !e.is_transient()))
            .count()
    }

    pub fn forecasts(&self) -> impl Iterator<Item = &MarineForecast> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}
