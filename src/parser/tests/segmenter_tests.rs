//! Tests for period segmentation

use super::super::segmenter::split_periods;
use super::puget_sound_bulletin;

#[test]
fn test_periods_in_source_order() {
    let text = puget_sound_bulletin();
    let names: Vec<&str> = split_periods(&text).iter().map(|s| s.name).collect();

    assert_eq!(names, vec!["TONIGHT", "WED", "WED NIGHT", "THU", "FRI", "SAT"]);
}

#[test]
fn test_body_spans_wrapped_lines() {
    let text = puget_sound_bulletin();
    let segments = split_periods(&text);

    assert_eq!(
        segments[0].body,
        "S wind 5 to 15 kt. Waves 2 ft or less. A chance of\nshowers after midnight."
    );
}

#[test]
fn test_body_stops_at_terminator() {
    let text = puget_sound_bulletin();
    let segments = split_periods(&text);
    let last = segments.last().unwrap();

    assert_eq!(last.name, "SAT");
    assert!(!last.body.contains("$$"));
    assert!(last.body.ends_with("slight chance of rain."));
}

#[test]
fn test_abc_order_preserved() {
    let segments = split_periods(".A...first\n.B...second\n.C...third");
    let pairs: Vec<(&str, &str)> = segments.iter().map(|s| (s.name, s.body)).collect();

    assert_eq!(pairs, vec![("A", "first"), ("B", "second"), ("C", "third")]);
}

#[test]
fn test_no_markers_yields_no_segments() {
    assert!(split_periods("").is_empty());
    assert!(split_periods("Just some text. No periods here.").is_empty());
    assert!(split_periods(".tonight...lowercase names are not markers").is_empty());
}

#[test]
fn test_names_and_bodies_are_trimmed() {
    let segments = split_periods("  .WED NIGHT ...   Calm.   \n");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].name, "WED NIGHT");
    assert_eq!(segments[0].body, "Calm.");
}

#[test]
fn test_empty_body() {
    let segments = split_periods(".TONIGHT...\n.WED...Calm.");
    assert_eq!(segments[0].body, "");
    assert_eq!(segments[1].body, "Calm.");
}

#[test]
fn test_multi_zone_product_keeps_every_marker() {
    let text = "PZZ133-061115-\nNorthern Inland Waters-\n305 PM PDT Tue Aug 5 2025\n\n\
                .TONIGHT...N wind 10 kt.\n.WED...Calm.\n\n$$\n\n\
                PZZ134-061115-\nAdmiralty Inlet-\n305 PM PDT Tue Aug 5 2025\n\n\
                .TONIGHT...W wind 5 kt.\n\n$$\n";
    let segments = split_periods(text);
    let pairs: Vec<(&str, &str)> = segments.iter().map(|s| (s.name, s.body)).collect();

    assert_eq!(
        pairs,
        vec![
            ("TONIGHT", "N wind 10 kt."),
            ("WED", "Calm."),
            ("TONIGHT", "W wind 5 kt."),
        ]
    );
}
