//! Marine bulletin parser
//!
//! Turns the raw text of a coastal marine forecast bulletin into a
//! [`MarineForecast`]. The input has no formal grammar, so parsing is an
//! ordered set of heuristics, each with a defined fallback. Parsing never
//! fails: malformed or empty input still produces a forecast, with a
//! placeholder zone name and an empty period list.
//!
//! ## Architecture
//!
//! - [`header`] - zone code, expiration code, zone name, issuance line
//! - [`timestamp`] - issuance and `DDHHMM` expiration resolution
//! - [`segmenter`] - `.NAME...` period splitting
//! - [`fields`] - ordered wind and wave/sea pattern sets
//! - [`weather`] - weather narrative derivation from what remains
//!
//! ## Usage
//!
//! ```rust
//! use marine_forecast::parser::BulletinParser;
//!
//! let text = "PZZ133-061115-\nNorthern Inland Waters-\n305 PM PDT Tue Aug 5 2025\n\n\
//!             .TONIGHT...N wind 10 to 15 kt. Waves around 2 ft or less. Showers likely.\n";
//! let forecast = BulletinParser::new().parse(text, "pzz133");
//!
//! assert_eq!(forecast.zone, "PZZ133");
//! assert_eq!(forecast.periods[0].wind, "N wind 10 to 15 kt");
//! ```

pub mod fields;
pub mod header;
pub mod segmenter;
pub mod timestamp;
pub mod weather;

#[cfg(test)]
pub mod tests;

use self::fields::{extract_waves, extract_wind};
use self::header::parse_zone_header;
use self::segmenter::{Segment, split_periods};
use self::timestamp::{resolve_expires, resolve_issued};
use self::weather::derive_weather;

use crate::models::{ForecastPeriod, MarineForecast};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use tracing::{debug, info};

/// Source of the reference instant used by timestamp fallbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Wall-clock time at parse
    #[default]
    System,
    /// A fixed instant, for reproducible output
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Current reference instant
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
        }
    }
}

/// Assembles a [`MarineForecast`] from raw bulletin text
///
/// Holds no state besides its clock, so one parser can be shared freely
/// across threads and tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletinParser {
    clock: Clock,
}

impl BulletinParser {
    /// Parser that resolves timestamps against the system clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser that resolves timestamps against a fixed instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            clock: Clock::Fixed(now),
        }
    }

    /// Parse a bulletin for `zone`
    pub fn parse(&self, text: &str, zone: &str) -> MarineForecast {
        let now = self.clock.now();
        let text = normalize_line_endings(text);

        info!("Parsing forecast for zone {}", zone.to_uppercase());

        let header = parse_zone_header(&text, zone);
        info!("Found zone: {}", header.zone_name);

        let issued = resolve_issued(&header.issued_raw, now);
        let expires = resolve_expires(&header.expires_code, now);

        let periods: Vec<ForecastPeriod> = split_periods(&text)
            .into_iter()
            .map(extract_period)
            .collect();

        info!("Extracted {} forecast periods", periods.len());

        MarineForecast {
            zone: header.zone_code,
            name: header.zone_name,
            issued,
            expires,
            periods,
        }
    }
}

/// Parse a bulletin against the current time
pub fn parse_bulletin(text: &str, zone: &str) -> MarineForecast {
    BulletinParser::new().parse(text, zone)
}

/// Run the three field passes over one segment
pub fn extract_period(segment: Segment<'_>) -> ForecastPeriod {
    let wind = extract_wind(segment.body);
    let waves = extract_waves(segment.body);

    let consumed: Vec<_> = [&wind, &waves]
        .into_iter()
        .flatten()
        .map(|found| found.span.clone())
        .collect();
    let weather = derive_weather(segment.body, &consumed);

    debug!(
        "Period {}: wind={:?} waves={:?} weather={:?}",
        segment.name,
        wind.as_ref().map(|w| w.text.as_str()),
        waves.as_ref().map(|w| w.text.as_str()),
        weather
    );

    ForecastPeriod {
        name: segment.name.to_string(),
        wind: wind.map(|w| w.text).unwrap_or_default(),
        waves: waves.map(|w| w.text).unwrap_or_default(),
        weather,
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
