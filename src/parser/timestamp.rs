//! Issuance and expiration timestamp resolution.
//!
//! Bulletins state their issuance time as free text (`305 PM PDT Tue Aug 5
//! 2025`) and their expiration as a `DDHHMM` code that omits month and year.
//! Both resolvers take the reference instant explicitly and fall back to it
//! whenever the input cannot be interpreted.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use tracing::debug;

/// Formats tried before the NWS issuance-line grammar
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const WEEKDAYS: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Resolve the issuance time, falling back to `now` on any parse failure
pub fn resolve_issued(issued_raw: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    match parse_issued(issued_raw) {
        Some(issued) => issued,
        None => {
            debug!("Could not parse issuance '{}', using current time", issued_raw);
            now
        }
    }
}

/// Resolve a `DDHHMM` expiration code relative to `now`
///
/// The day is assumed to fall in the current month; if that instant has
/// already passed, the following month is used instead. Malformed codes or
/// impossible dates resolve to `now`.
pub fn resolve_expires(expires_code: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    match expires_from_code(expires_code, now) {
        Some(expires) => expires,
        None => {
            debug!(
                "Could not resolve expiration code '{}', using current time",
                expires_code
            );
            now
        }
    }
}

fn expires_from_code(code: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let day: u32 = code[0..2].parse().ok()?;
    let hour: u32 = code[2..4].parse().ok()?;
    let minute: u32 = code[4..6].parse().ok()?;

    let expires = now
        .with_day(day)?
        .with_hour(hour)?
        .with_minute(minute)?
        .with_second(0)?
        .with_nanosecond(0)?;

    if expires >= now {
        return Some(expires);
    }

    if expires.month() == 12 {
        expires.with_year(expires.year() + 1)?.with_month(1)
    } else {
        expires.with_month(expires.month() + 1)
    }
}

/// Permissive issuance parser
///
/// Accepts RFC 3339, RFC 2822, a few ISO-like layouts, and the NWS
/// issuance line.
pub fn parse_issued(raw: &str) -> Option<DateTime<Utc>> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(cleaned) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(cleaned, format) {
            return Some(naive.and_utc());
        }
    }

    parse_nws_issuance(cleaned)
}

/// `HMM AM|PM TZ [Dow] Mon D YYYY`, with `NOON`/`MIDNIGHT` in place of the
/// clock time
fn parse_nws_issuance(text: &str) -> Option<DateTime<Utc>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut idx = 0;

    let (hour, minute) = match tokens.first()?.to_ascii_uppercase().as_str() {
        "NOON" => {
            idx += 1;
            (12, 0)
        }
        "MIDNIGHT" => {
            idx += 1;
            (0, 0)
        }
        clock => {
            let meridiem = tokens.get(1)?;
            idx += 2;
            parse_clock(clock, meridiem)?
        }
    };

    let mut offset = FixedOffset::east_opt(0)?;
    if let Some(token) = tokens.get(idx) {
        if let Some(seconds) = zone_offset_seconds(token) {
            offset = FixedOffset::east_opt(seconds)?;
            idx += 1;
        } else if token.chars().all(|c| c.is_ascii_alphabetic())
            && !is_weekday(token)
            && !is_month(token)
        {
            debug!("Unknown time zone '{}' in issuance, assuming UTC", token);
            idx += 1;
        }
    }

    if tokens.get(idx).is_some_and(|t| is_weekday(t)) {
        idx += 1;
    }

    let date_tokens = tokens.get(idx..idx + 3)?;
    let date = NaiveDate::parse_from_str(&date_tokens.join(" "), "%b %d %Y").ok()?;
    let local = date.and_hms_opt(hour, minute, 0)?;

    offset
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `305` + `PM` -> (15, 5); `11` + `AM` -> (11, 0)
fn parse_clock(clock: &str, meridiem: &str) -> Option<(u32, u32)> {
    if clock.is_empty() || clock.len() > 4 || !clock.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (hour, minute) = if clock.len() <= 2 {
        (clock.parse::<u32>().ok()?, 0)
    } else {
        let split = clock.len() - 2;
        (
            clock[..split].parse::<u32>().ok()?,
            clock[split..].parse::<u32>().ok()?,
        )
    };

    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    match meridiem.to_ascii_uppercase().as_str() {
        "AM" => Some((hour % 12, minute)),
        "PM" => Some((hour % 12 + 12, minute)),
        _ => None,
    }
}

/// UTC offset for the time zone abbreviations used in US bulletins
fn zone_offset_seconds(abbreviation: &str) -> Option<i32> {
    let hours = match abbreviation.to_ascii_uppercase().as_str() {
        "UTC" | "GMT" | "Z" => 0,
        "CHST" => 10,
        "SST" => -11,
        "HST" => -10,
        "AKST" => -9,
        "AKDT" | "PST" => -8,
        "PDT" | "MST" => -7,
        "MDT" | "CST" => -6,
        "CDT" | "EST" => -5,
        "EDT" | "AST" => -4,
        _ => return None,
    };
    Some(hours * 3600)
}

fn is_weekday(token: &str) -> bool {
    prefix_in(token, WEEKDAYS)
}

fn is_month(token: &str) -> bool {
    prefix_in(token, MONTHS)
}

fn prefix_in(token: &str, names: &[&str]) -> bool {
    token.len() >= 3
        && token.is_char_boundary(3)
        && names.contains(&token[..3].to_ascii_lowercase().as_str())
}
