//! Marine Forecast Library
//!
//! Turns NWS coastal marine forecast bulletins into structured records.
//!
//! This library provides tools for:
//! - Parsing the zone header and resolving issuance and expiry timestamps
//! - Splitting a bulletin into named forecast periods
//! - Extracting wind, wave and weather narratives for each period
//! - Fetching bulletins for many zones concurrently with per-zone failure reporting
//!
//! ```
//! use marine_forecast::parse_bulletin;
//!
//! let forecast = parse_bulletin(
//!     "PZZ134-061115-\nAdmiralty Inlet-\n305 PM PDT Tue Aug 5 2025\n\n.TONIGHT...Calm. Patchy fog.\n",
//!     "pzz134",
//! );
//! assert_eq!(forecast.name, "Admiralty Inlet");
//! assert_eq!(forecast.periods[0].wind, "Calm");
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;

pub use batch::{BatchRunner, resolve_zones};
pub use config::ForecastConfig;
pub use error::{FetchError, ForecastError, Result};
pub use fetcher::ZoneFetcher;
pub use models::{BatchReport, ForecastPeriod, MarineForecast, ZoneHeader, ZoneOutcome};
pub use parser::{BulletinParser, Clock, parse_bulletin};
