//! Weather narrative derivation.
//!
//! Whatever is left of a period body once the wind and wave phrases have
//! been cut out is split into sentences, filtered down to the ones that read
//! like weather, repaired where a sentence dangles on "of", and joined back
//! together. The result is dropped entirely if it still looks like a wave
//! report.

use super::fields::collapse_whitespace;
use crate::constants::{OF_COMPLETIONS, WEATHER_KEYWORDS};
use regex::{Regex, RegexBuilder};
use std::ops::Range;
use std::sync::LazyLock;
use tracing::trace;

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("weather pattern is valid")
}

/// Leftover `Waves`/`Seas` words once the wave phrase has been removed
static STANDALONE_FIELD_WORD: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"\b(?:Waves?|Seas?)\b\.?"));

/// Sentences that are sea-state detail rather than weather
static NOISE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(?:Wave Detail|Combined seas)",
        r"^\d+\s+ft\s+at\s+\d+\s+seconds",
        r"^around\s+\d+\s+ft",
        r"^\d+\s+to\s+\d+\s+ft",
    ]
    .into_iter()
    .map(case_insensitive)
    .collect()
});

static WEATHER_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?:a|an)\s+(?:chance|slight\s+chance)\s+of\s+\w+",
        r"\b(?:showers?|rain)\b",
        r"\b(?:likely|possible|probable)\b",
        r"\bmainly\s+in\s+the\s+(?:morning|afternoon|evening)\b",
    ]
    .into_iter()
    .map(case_insensitive)
    .collect()
});

static WAVE_LEAD: LazyLock<Regex> = LazyLock::new(|| case_insensitive(r"^(?:Waves?|Seas?)\b"));

/// Derive the weather narrative from a period body
///
/// `consumed` holds the byte spans already claimed by the wind and wave
/// extractors; they are cut out by position so that identical text elsewhere
/// in the body survives.
pub fn derive_weather(body: &str, consumed: &[Range<usize>]) -> Option<String> {
    let remaining = remove_spans(body, consumed);
    let trimmed = trim_separators(&remaining);
    let stripped = STANDALONE_FIELD_WORD.replace_all(trimmed, "");
    let candidate_text = trim_separators(&stripped);

    let sentences: Vec<String> = candidate_text
        .split('.')
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() >= 4)
        .filter(|sentence| !is_noise(sentence))
        .filter(|sentence| is_weather(sentence))
        .map(|sentence| repair_dangling_of(&collapse_whitespace(sentence), body))
        .collect();

    if sentences.is_empty() {
        return None;
    }

    reject_wave_lead(capitalize_first(&collapse_whitespace(&sentences.join(". "))))
}

/// Weather text that opens with Waves/Seas is sea state, not weather
fn reject_wave_lead(weather: String) -> Option<String> {
    if WAVE_LEAD.is_match(&weather) {
        trace!("Discarding wave-like weather text '{}'", weather);
        return None;
    }
    Some(weather)
}

/// Cut the given byte spans out of `text`, merging any overlap
fn remove_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut spans: Vec<Range<usize>> = spans
        .iter()
        .filter(|span| span.start < span.end && span.end <= text.len())
        .cloned()
        .collect();
    spans.sort_by_key(|span| span.start);

    let mut kept = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            kept.push_str(&text[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    kept.push_str(&text[cursor.min(text.len())..]);
    kept
}

fn trim_separators(text: &str) -> &str {
    text.trim_matches([' ', '.', ',', '\n'])
}

fn is_noise(sentence: &str) -> bool {
    NOISE.iter().any(|pattern| pattern.is_match(sentence))
}

fn is_weather(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    WEATHER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        || WEATHER_PHRASES.iter().any(|pattern| pattern.is_match(sentence))
}

/// Complete a sentence that ends in a bare "of"
///
/// The full period body is searched for the same words followed by "of <word>";
/// failing that, a fixed completion table is consulted.
fn repair_dangling_of(sentence: &str, body: &str) -> String {
    let Some(prefix) = sentence.strip_suffix(" of") else {
        return sentence.to_string();
    };

    if let Some(recovered) = recover_from_body(prefix, body) {
        return format!("{} of {}", prefix, recovered);
    }

    let lower = sentence.to_lowercase();
    for (phrase, completion) in OF_COMPLETIONS {
        if lower.ends_with(phrase) {
            return format!("{} {}", sentence, completion);
        }
    }

    sentence.to_string()
}

fn recover_from_body(prefix: &str, body: &str) -> Option<String> {
    let words: Vec<String> = prefix.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }

    let pattern = format!(r"{}\s+of\s+(\w+(?:[ \t]+\w+)*)", words.join(r"\s+"));
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;

    regex
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => first.to_uppercase().chain(chars).collect(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_spans_merges_overlap() {
        let text = "0123456789";
        assert_eq!(remove_spans(text, &[2..5, 4..7]), "01789");
        assert_eq!(remove_spans(text, &[8..10, 0..2]), "234567");
        assert_eq!(remove_spans(text, &[]), text);
    }

    #[test]
    fn test_remove_spans_ignores_out_of_range() {
        assert_eq!(remove_spans("abc", &[1..9]), "abc");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("rain likely"), "Rain likely");
        assert_eq!(capitalize_first("Rain"), "Rain");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_reject_wave_lead() {
        assert_eq!(reject_wave_lead("Waves building to 4 ft".to_string()), None);
        assert_eq!(reject_wave_lead("Seas 3 ft. Rain".to_string()), None);
        assert_eq!(reject_wave_lead("Sea fog".to_string()), None);
        assert_eq!(
            reject_wave_lead("Seasonable with showers".to_string()),
            Some("Seasonable with showers".to_string())
        );
        assert_eq!(
            reject_wave_lead("Rain. Waves 2 ft".to_string()),
            Some("Rain. Waves 2 ft".to_string())
        );
    }

    #[test]
    fn test_noise_sentences() {
        assert!(is_noise("Wave Detail: W 4 ft at 9 seconds"));
        assert!(is_noise("4 ft at 9 seconds"));
        assert!(is_noise("around 3 ft"));
        assert!(is_noise("2 to 4 ft"));
        assert!(!is_noise("Rain likely"));
    }

    #[test]
    fn test_dangling_of_recovered_from_body() {
        let repaired = repair_dangling_of(
            "a slight chance of",
            "A slight chance of drizzle in the morning.",
        );
        assert_eq!(repaired, "a slight chance of drizzle in the morning");

        let body = "Mostly cloudy with a chance of\nrain. Seas 3 ft.";
        assert_eq!(
            repair_dangling_of("Mostly cloudy with a chance of", body),
            "Mostly cloudy with a chance of rain"
        );
    }

    #[test]
    fn test_dangling_of_falls_back_to_completion_table() {
        assert_eq!(
            repair_dangling_of("a chance of", "Rain likely. a chance of."),
            "a chance of showers"
        );
        assert_eq!(
            repair_dangling_of("Some possibility of", "Some possibility of."),
            "Some possibility of showers"
        );
        assert_eq!(
            repair_dangling_of("Clear outside of", "Clear outside of."),
            "Clear outside of"
        );
    }
}
