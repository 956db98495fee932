//! Bulletin header parsing and zone metadata extraction.
//!
//! Locates the `<ZONE>-<DDHHMM>-` / `<NAME>-` / `<ISSUED>` block at the top of
//! a zone bulletin. Never fails: when the block cannot be matched, a looser
//! pattern recovers what it can and the rest is filled from fixed defaults.

use crate::constants::{FALLBACK_EXPIRES_CODE, FALLBACK_ISSUED};
use crate::models::ZoneHeader;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// Extract the header block for `zone` from raw bulletin text
pub fn parse_zone_header(text: &str, zone: &str) -> ZoneHeader {
    let zone_code = zone.trim().to_uppercase();

    // A blank code would turn the patterns into "match any zone"
    if zone_code.is_empty() {
        warn!("Empty zone code, using fallback header");
        return fallback_header(zone_code, None);
    }

    if let Some(header) = match_full_header(text, &zone_code) {
        debug!(
            "Parsed header for {}: expires={}, issued='{}'",
            zone_code, header.expires_code, header.issued_raw
        );
        return header;
    }

    warn!("Could not parse zone header for {}, using fallback", zone_code);

    let zone_name = match_zone_name(text, &zone_code);
    fallback_header(zone_code, zone_name)
}

fn fallback_header(zone_code: String, zone_name: Option<String>) -> ZoneHeader {
    let zone_name = zone_name.unwrap_or_else(|| format!("Zone {}", zone_code).trim_end().to_string());

    ZoneHeader {
        zone_code,
        expires_code: FALLBACK_EXPIRES_CODE.to_string(),
        zone_name,
        issued_raw: FALLBACK_ISSUED.to_string(),
    }
}

/// Full three-line header: code line, name line, issuance line
fn match_full_header(text: &str, zone_code: &str) -> Option<ZoneHeader> {
    let pattern = format!(
        r"{}-(\d{{6}})-\n(.+?)-\n(.+?)(?:\n|$)",
        regex::escape(zone_code)
    );
    let caps = zone_regex(&pattern)?.captures(text)?;

    let zone_name = caps[2].trim();
    let issued_raw = caps[3].trim();
    if zone_name.is_empty() || issued_raw.is_empty() {
        return None;
    }

    Some(ZoneHeader {
        zone_code: zone_code.to_string(),
        expires_code: caps[1].to_string(),
        zone_name: zone_name.to_string(),
        issued_raw: issued_raw.to_string(),
    })
}

/// Looser match that only recovers the zone name
fn match_zone_name(text: &str, zone_code: &str) -> Option<String> {
    let pattern = format!(r"{}-\d+-\n(.+?)-", regex::escape(zone_code));
    let caps = zone_regex(&pattern)?.captures(text)?;

    let name = caps[1].trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn zone_regex(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| warn!("Invalid header pattern {}: {}", pattern, e))
        .ok()
}
