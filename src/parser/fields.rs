//! Wind and wave/sea extraction for a single period body.
//!
//! Each field has an ordered list of candidate patterns. Candidates are tried
//! top to bottom and the first one that matches anywhere in the body wins;
//! later candidates are never consulted, even if they would match earlier in
//! the text or produce a longer result.

use regex::{Regex, RegexBuilder};
use std::ops::Range;
use std::sync::LazyLock;
use tracing::trace;

/// Text matched for a field together with where it sits in the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub text: String,
    /// Byte range in the period body covered by the match
    pub span: Range<usize>,
}

/// How far a wave/sea match extends past its `ft` unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    /// The pattern match is the whole result
    Exact,
    /// Extend up to the next capitalised word, `.`/`!`, or end of text
    Bounded,
}

struct Candidate {
    label: &'static str,
    regex: Regex,
    tail: Tail,
}

fn candidate(label: &'static str, pattern: &str, tail: Tail) -> Candidate {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("field pattern is valid");
    Candidate { label, regex, tail }
}

static WIND_CANDIDATES: LazyLock<Vec<Candidate>> = LazyLock::new(|| {
    vec![
        candidate(
            "directional",
            r"\b[NSEW]+\s+wind[^.]+?(?:kt|knots)[^.]*",
            Tail::Exact,
        ),
        candidate("variable", r"Variable\s+wind[^.]+", Tail::Exact),
        candidate("light and variable", r"Light\s+and\s+variable[^.]+", Tail::Exact),
        candidate("calm", r"Calm[^.]*", Tail::Exact),
    ]
});

static WAVE_CANDIDATES: LazyLock<Vec<Candidate>> = LazyLock::new(|| {
    ["Waves", "Seas"]
        .into_iter()
        .flat_map(|noun| {
            [
                candidate(
                    "around N or less",
                    &format!(r"{noun}\s+around\s+[0-9]+\s+(?:ft|feet)\s+or\s+less"),
                    Tail::Exact,
                ),
                candidate(
                    "range",
                    &format!(r"{noun}\s+[0-9]+\s+to\s+[0-9]+\s+(?:ft|feet)(?:\s+or\s+less)?"),
                    Tail::Exact,
                ),
                candidate(
                    "around N",
                    &format!(r"{noun}\s+around\s+[0-9]+\s+(?:ft|feet)"),
                    Tail::Exact,
                ),
                candidate(
                    "single height",
                    &format!(r"{noun}\s+[0-9]+\s+(?:ft|feet)"),
                    Tail::Exact,
                ),
                candidate(
                    "around free text",
                    &format!(r"{noun}\s+around\s+[^.]+?(?:ft|feet)"),
                    Tail::Bounded,
                ),
                candidate(
                    "free text",
                    &format!(r"{noun}\s+[^.]+?(?:ft|feet)"),
                    Tail::Bounded,
                ),
            ]
        })
        .collect()
});

/// Extract the wind phrase; `None` when no candidate matches
pub fn extract_wind(body: &str) -> Option<FieldMatch> {
    first_match(&WIND_CANDIDATES, body).and_then(|(_, span)| {
        // Bodies can wrap across lines; the phrase is reported on one line
        let raw = &body[span.clone()];
        let text = collapse_whitespace(raw);
        (!text.is_empty()).then(|| FieldMatch {
            text,
            span: trimmed_span(raw, span),
        })
    })
}

/// Extract the wave or sea-state phrase; `None` when no candidate matches
pub fn extract_waves(body: &str) -> Option<FieldMatch> {
    let (_, span) = first_match(&WAVE_CANDIDATES, body)?;
    let raw = &body[span.clone()];
    let span = trimmed_span(raw, span);

    let mut text = collapse_whitespace(raw);
    if !text.ends_with('.') {
        text = text.trim_end_matches([',', '!']).to_string();
    }

    (!text.is_empty()).then_some(FieldMatch { text, span })
}

fn first_match(candidates: &[Candidate], body: &str) -> Option<(&'static str, Range<usize>)> {
    candidates.iter().find_map(|candidate| {
        let found = candidate.regex.find(body)?;
        let end = match candidate.tail {
            Tail::Exact => found.end(),
            Tail::Bounded => bounded_tail_end(body, found.end()),
        };
        trace!("Matched {} pattern at {}..{}", candidate.label, found.start(), end);
        Some((candidate.label, found.start()..end))
    })
}

/// Smallest extension from `from` that stops before a capitalised word,
/// sentence punctuation, or the end of the body; never crosses a `.`
fn bounded_tail_end(body: &str, from: usize) -> usize {
    let mut pos = from;
    loop {
        let rest = &body[pos..];
        let ahead = rest.trim_start();
        if ahead.is_empty() || ahead.starts_with(['.', '!']) || starts_capitalised_word(ahead) {
            return pos;
        }
        match rest.chars().next() {
            Some(c) if c != '.' => pos += c.len_utf8(),
            _ => return pos,
        }
    }
}

fn starts_capitalised_word(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second)) if first.is_ascii_uppercase() && second.is_ascii_lowercase()
    )
}

/// Narrow a span so it matches `raw.trim()`
fn trimmed_span(raw: &str, span: Range<usize>) -> Range<usize> {
    let leading = raw.len() - raw.trim_start().len();
    let trailing = raw.len() - raw.trim_end().len();
    (span.start + leading)..(span.end - trailing)
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_tail_stops_at_capitalised_word() {
        let body = "Waves around 2 to 4 ft in the afternoon Rain likely.";
        let found = extract_waves(body).unwrap();
        assert_eq!(found.text, "Waves around 2 to 4 ft in the afternoon");
    }

    #[test]
    fn test_bounded_tail_stops_at_sentence_end() {
        let body = "Waves around 2 to 4 ft building. Rain.";
        let found = extract_waves(body).unwrap();
        assert_eq!(found.text, "Waves around 2 to 4 ft building");
        assert_eq!(&body[found.span], "Waves around 2 to 4 ft building");
    }

    #[test]
    fn test_wind_span_points_at_match() {
        let body = "Rain. SW wind 5 to 15 kt. Waves 2 ft.";
        let found = extract_wind(body).unwrap();
        assert_eq!(&body[found.span.clone()], "SW wind 5 to 15 kt");
        assert_eq!(found.span.start, 6);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Waves \n 2   ft "), "Waves 2 ft");
    }
}
