//! Tests for the bulletin parser
//!
//! Shared fixtures modelled on real Seattle-office coastal bulletins, plus a
//! fixed reference clock so timestamp fallbacks are reproducible.

use chrono::{DateTime, TimeZone, Utc};

mod field_tests;
mod segmenter_tests;

/// Reference instant used by every parser test: 2025-08-05 22:30 UTC
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 5, 22, 30, 0).unwrap()
}

/// Inland-waters bulletin with a product preamble and `$$` terminator
pub fn puget_sound_bulletin() -> String {
    r#"FZUS56 KSEW 052205
CWFSEW

Coastal Waters Forecast for Washington
National Weather Service Seattle WA
305 PM PDT Tue Aug 5 2025

PZZ135-061115-
Puget Sound and Hood Canal-
305 PM PDT Tue Aug 5 2025

.TONIGHT...S wind 5 to 15 kt. Waves 2 ft or less. A chance of
showers after midnight.
.WED...SW wind 10 to 20 kt. Waves 1 to 3 ft. Showers likely.
.WED NIGHT...W wind 5 to 15 kt. Waves 2 ft or less.
.THU...Light and variable wind. Waves 1 ft or less. Patchy fog in
the morning.
.FRI...Variable wind 5 kt or less. Waves around 1 ft.
.SAT...Calm. Waves 1 ft or less. Mostly cloudy with a slight chance of rain.

$$
"#
    .to_string()
}

/// Outer-coast bulletin using Seas and wave detail lines
pub fn coastal_bulletin() -> String {
    r#"PZZ150-061115-
Coastal Waters From Cape Flattery To James Island Out 10 Nm-
305 PM PDT Tue Aug 5 2025

.TONIGHT...NW wind 10 to 20 kt. Seas 5 to 7 ft. Wave Detail: W 6 ft
at 9 seconds.
.WED...NW wind 5 to 15 kt. Seas 4 to 6 ft. Wave Detail: W 5 ft at 9 seconds. Patchy fog in the morning.

$$
"#
    .to_string()
}
