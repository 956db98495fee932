//! Tests for the ordered wind and wave/sea pattern sets

use super::super::fields::{extract_waves, extract_wind};

fn wind(body: &str) -> String {
    extract_wind(body).map(|m| m.text).unwrap_or_default()
}

fn waves(body: &str) -> String {
    extract_waves(body).map(|m| m.text).unwrap_or_default()
}

#[test]
fn test_directional_wind() {
    assert_eq!(wind("N wind 10 to 15 kt. Waves around 2 ft or less."), "N wind 10 to 15 kt");
    assert_eq!(wind("SW wind 15 to 25 knots easing. Seas 8 ft."), "SW wind 15 to 25 knots easing");
    assert_eq!(wind("Rain. nw wind 5 kt."), "nw wind 5 kt");
}

#[test]
fn test_directional_wind_requires_unit() {
    // No kt/knots before the sentence ends, so the directional pattern is skipped
    assert_eq!(wind("E wind rising. Calm later."), "Calm later");
}

#[test]
fn test_variable_and_light_wind() {
    assert_eq!(wind("Variable wind 5 kt or less. Waves 1 ft."), "Variable wind 5 kt or less");
    assert_eq!(wind("Light and variable wind. Waves 1 ft."), "Light and variable wind");
}

#[test]
fn test_calm_wind() {
    assert_eq!(wind("Calm. Waves 1 ft or less."), "Calm");
}

#[test]
fn test_wind_first_pattern_wins_over_earlier_text() {
    // Calm appears first in the text, but the directional pattern ranks higher
    assert_eq!(wind("Calm early. S wind 10 kt in the afternoon."), "S wind 10 kt in the afternoon");
}

#[test]
fn test_wind_wrapped_line_collapsed() {
    assert_eq!(wind("SW wind 10 to 20 kt\nrising to 25 kt. Waves 3 ft."), "SW wind 10 to 20 kt rising to 25 kt");
}

#[test]
fn test_no_wind() {
    assert_eq!(wind("Waves 2 ft. Showers likely."), "");
    assert!(extract_wind("").is_none());
}

#[test]
fn test_wave_patterns_most_specific_first() {
    assert_eq!(waves("Waves around 2 ft or less."), "Waves around 2 ft or less");
    assert_eq!(waves("Waves 1 to 3 ft or less."), "Waves 1 to 3 ft or less");
    assert_eq!(waves("Waves 1 to 3 feet."), "Waves 1 to 3 feet");
    assert_eq!(waves("Waves around 3 ft."), "Waves around 3 ft");
    assert_eq!(waves("Waves 2 ft or less."), "Waves 2 ft");
}

#[test]
fn test_waves_rank_above_seas() {
    assert_eq!(waves("Seas 5 to 7 ft. Waves 2 ft."), "Waves 2 ft");
}

#[test]
fn test_seas_patterns() {
    assert_eq!(waves("NW wind 10 kt. Seas 5 to 7 ft. Wave Detail: W 6 ft at 9 seconds."), "Seas 5 to 7 ft");
    assert_eq!(waves("Seas around 4 ft or less."), "Seas around 4 ft or less");
    assert_eq!(waves("Seas 8 ft."), "Seas 8 ft");
}

#[test]
fn test_free_text_waves_bounded() {
    assert_eq!(waves("Waves around 2 to 4 ft,  building! Rain."), "Waves around 2 to 4 ft, building");
    assert_eq!(waves("Seas   building to 10 ft"), "Seas building to 10 ft");
}

#[test]
fn test_no_waves() {
    assert_eq!(waves("N wind 10 kt. Showers likely."), "");
    assert_eq!(waves("Wave Detail: W 6 ft at 9 seconds."), "");
}

#[test]
fn test_free_text_tail_keeps_lowercase_words() {
    assert_eq!(
        waves("Waves building to 4 ft at times Rain likely."),
        "Waves building to 4 ft at times"
    );
    assert_eq!(
        waves("Seas building to 10 ft or less later."),
        "Seas building to 10 ft or less later"
    );
}
