//! Splits a bulletin into its named forecast periods.

use crate::constants::PRODUCT_TERMINATOR;
use regex::Regex;
use std::sync::LazyLock;

/// `.TONIGHT...` / `.WED NIGHT...` anywhere in the text
static PERIOD_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.([A-Z][A-Z ]*)\.\.\.").expect("period marker pattern is valid")
});

/// A named period with its untouched body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

/// Split `text` into period segments in source order
///
/// The whole text is scanned, so every marker yields a segment. Each body
/// runs to the next marker, an `$$` terminator line, or end of text.
/// Text without markers yields no segments.
pub fn split_periods(text: &str) -> Vec<Segment<'_>> {
    let terminators = terminator_offsets(text);
    let markers: Vec<_> = PERIOD_MARKER.captures_iter(text).collect();
    let mut segments = Vec::with_capacity(markers.len());

    for (i, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let next_marker = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        let body_end = terminators
            .iter()
            .copied()
            .find(|&offset| offset >= whole.end())
            .map_or(next_marker, |offset| offset.min(next_marker));

        segments.push(Segment {
            name: name.as_str().trim(),
            body: text[whole.end()..body_end].trim(),
        });
    }

    segments
}

/// Byte offsets of every `$$` line, in order
fn terminator_offsets(text: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim() == PRODUCT_TERMINATOR {
            offsets.push(offset);
        }
        offset += line.len();
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_offsets() {
        let text = "PZZ133-061115-\n.TONIGHT...Calm.\n$$\nnext product\n  $$  \n";
        assert_eq!(terminator_offsets(text), vec![32, 48]);
        assert!(terminator_offsets("no terminator").is_empty());
        assert!(terminator_offsets("costs $$ more").is_empty());
    }

    #[test]
    fn test_mid_line_marker_starts_a_period() {
        let segments = split_periods("Showers likely. .LATER...ignored\n.WED...Calm.");
        let pairs: Vec<(&str, &str)> = segments.iter().map(|s| (s.name, s.body)).collect();

        assert_eq!(pairs, vec![("LATER", "ignored"), ("WED", "Calm.")]);
    }

    #[test]
    fn test_marker_after_terminator_starts_a_period() {
        let segments = split_periods(".TONIGHT...Calm.\n$$\n.WED...Rain likely.\n");
        let pairs: Vec<(&str, &str)> = segments.iter().map(|s| (s.name, s.body)).collect();

        assert_eq!(pairs, vec![("TONIGHT", "Calm."), ("WED", "Rain likely.")]);
    }
}
