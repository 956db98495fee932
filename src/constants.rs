//! Application constants for the marine forecast parser
//!
//! Zone catalogue, fetch defaults, header fallbacks, and the keyword
//! tables used by weather derivation.

// =============================================================================
// Zone Catalogue
// =============================================================================

/// Forecast zones served by the Seattle office, with display names
pub const ZONES: &[(&str, &str)] = &[
    (
        "pzz100",
        "Synopsis for Northern and Central Washington Coastal and Inland Waters",
    ),
    ("pzz110", "Grays Harbor Bar"),
    ("pzz130", "West Entrance U.S. Waters Strait Of Juan De Fuca"),
    ("pzz131", "Central U.S. Waters Strait Of Juan De Fuca"),
    ("pzz132", "East Entrance U.S. Waters Strait Of Juan De Fuca"),
    ("pzz133", "Northern Inland Waters Including The San Juan Islands"),
    ("pzz134", "Admiralty Inlet"),
    ("pzz135", "Puget Sound and Hood Canal"),
    (
        "pzz150",
        "Coastal Waters From Cape Flattery To James Island Out 10 Nm",
    ),
    (
        "pzz153",
        "Coastal Waters From James Island To Point Grenville Out 10 Nm",
    ),
    (
        "pzz156",
        "Coastal Waters From Point Grenville To Cape Shoalwater Out 10 Nm",
    ),
    (
        "pzz170",
        "Coastal Waters From Cape Flattery To James Island 10 To 60 Nm",
    ),
    (
        "pzz173",
        "Coastal Waters From James Island To Point Grenville 10 To 60 Nm",
    ),
    (
        "pzz176",
        "Coastal Waters From Point Grenville To Cape Shoalwater 10 To 60 Nm",
    ),
];

/// Find the catalogue display name for a zone code (any case)
pub fn zone_display_name(zone: &str) -> Option<&'static str> {
    let zone = zone.to_ascii_lowercase();
    ZONES
        .iter()
        .find(|(code, _)| *code == zone)
        .map(|(_, name)| *name)
}

// =============================================================================
// Fetch Defaults
// =============================================================================

/// Directory of coastal marine bulletins for the Pacific region
pub const DEFAULT_BASE_URL: &str = "https://tgftp.nws.noaa.gov/data/forecasts/marine/coastal/pz";

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

pub const DEFAULT_USER_AGENT: &str = concat!("marine-forecast/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Header Fallbacks
// =============================================================================

/// Expiration code used when the header cannot be matched
pub const FALLBACK_EXPIRES_CODE: &str = "999999";

/// Issuance string used when the header cannot be matched
pub const FALLBACK_ISSUED: &str = "Now";

/// Line that terminates an NWS product segment
pub const PRODUCT_TERMINATOR: &str = "$$";

// =============================================================================
// Weather Derivation
// =============================================================================

/// Substrings that mark a sentence as weather narrative
pub const WEATHER_KEYWORDS: &[&str] = &[
    "shower",
    "rain",
    "storm",
    "thunder",
    "clear",
    "sunny",
    "cloudy",
    "overcast",
    "fog",
    "mist",
    "chance",
    "likely",
    "possible",
    "occasional",
    "scattered",
    "isolated",
    "mainly",
    "partly",
    "mostly",
    "becoming",
    "then",
    "until",
    "after",
    "tstms",
    "thunderstorms",
];

/// Completions for sentences left dangling on "of", checked in order
pub const OF_COMPLETIONS: &[(&str, &str)] = &[
    ("a chance of", "showers"),
    ("a slight chance of", "showers"),
    ("chance of", "showers"),
    ("possibility of", "showers"),
];
