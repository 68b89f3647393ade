//! Direct transcript parsing — the heuristic extraction variant.
//!
//! Splits the transcript on `,` `.` `;`, reads the first standalone integer
//! in each segment as the quantity, scrubs punctuation and unit stop-words,
//! then fuzzy-matches the remainder against the menu.  Segments that score
//! below the acceptance threshold are silently dropped: this is a
//! recall/precision trade-off, not a failure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{Candidate, ExtractError, ItemExtractor};
use crate::menu::MenuCatalog;

// ---------------------------------------------------------------------------
// Patterns and stop-words
// ---------------------------------------------------------------------------

/// First standalone decimal number in a segment (word-boundary token).
static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").expect("valid regex"));

/// Everything that is neither a word character nor whitespace.
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Unit/count words that carry no item information.
const STOP_WORDS: &[&str] = &[
    "count", "piece", "pieces", "nos", "x", "no", "ct", "pk", "qt", "pack",
];

// ---------------------------------------------------------------------------
// TranscriptExtractor
// ---------------------------------------------------------------------------

/// Heuristic extractor over a raw speech transcript.
///
/// Never returns `Err` — every recoverable problem is handled by dropping
/// the offending segment.
#[derive(Debug, Clone)]
pub struct TranscriptExtractor {
    threshold: u8,
}

impl TranscriptExtractor {
    /// Create an extractor with the given fuzzy acceptance threshold (0–100).
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl Default for TranscriptExtractor {
    fn default() -> Self {
        Self::new(crate::config::MatchConfig::default().transcript_threshold)
    }
}

impl ItemExtractor for TranscriptExtractor {
    fn extract(&self, text: &str, catalog: &MenuCatalog) -> Result<Vec<Candidate>, ExtractError> {
        let mut out = Vec::new();

        for segment in text.split([',', '.', ';']) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let (quantity, remainder) = split_quantity(segment);
            let cleaned = clean_candidate(&remainder);
            if cleaned.is_empty() {
                continue;
            }

            let Some(m) = catalog.best_match(&cleaned) else {
                continue; // empty catalog
            };

            if m.score >= self.threshold {
                out.push(Candidate::new(m.name, quantity));
            } else {
                log::debug!(
                    "extract: dropping low-confidence segment {cleaned:?} \
                     (best {:?} at {})",
                    m.name,
                    m.score
                );
            }
        }

        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Segment helpers
// ---------------------------------------------------------------------------

/// Pull the first standalone integer token out of `segment`.
///
/// Returns the quantity and the segment text with exactly that occurrence
/// removed.  Defaults to quantity 1 when no number is present; a literal `0`
/// or a digit run too long for `u32` also clamps to 1 (quantities are
/// positive by contract).
fn split_quantity(segment: &str) -> (u32, String) {
    match QUANTITY_RE.find(segment) {
        Some(m) => {
            let quantity = m.as_str().parse::<u32>().map(|q| q.max(1)).unwrap_or(1);
            let mut rest = String::with_capacity(segment.len());
            rest.push_str(&segment[..m.start()]);
            rest.push_str(&segment[m.end()..]);
            (quantity, rest)
        }
        None => (1, segment.to_string()),
    }
}

/// Strip punctuation, lowercase, and drop stop-word tokens.
fn clean_candidate(text: &str) -> String {
    let stripped = PUNCT_RE.replace_all(text, "");
    stripped
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(&AppConfig::default().menu)
    }

    fn extract(text: &str) -> Vec<Candidate> {
        TranscriptExtractor::default()
            .extract(text, &catalog())
            .expect("transcript variant never errors")
    }

    // --- split_quantity ---

    #[test]
    fn quantity_is_first_standalone_number() {
        let (q, rest) = split_quantity("2 chicken burger");
        assert_eq!(q, 2);
        assert_eq!(rest, " chicken burger");
    }

    #[test]
    fn quantity_defaults_to_one() {
        let (q, rest) = split_quantity("veg sandwich");
        assert_eq!(q, 1);
        assert_eq!(rest, "veg sandwich");
    }

    #[test]
    fn only_first_number_is_removed() {
        let (q, rest) = split_quantity("2 burgers and 3 fries");
        assert_eq!(q, 2);
        assert_eq!(rest, " burgers and 3 fries");
    }

    #[test]
    fn embedded_digits_are_not_quantities() {
        // "x2y" has no word-boundary integer token.
        let (q, rest) = split_quantity("x2y burger");
        assert_eq!(q, 1);
        assert_eq!(rest, "x2y burger");
    }

    #[test]
    fn zero_quantity_clamps_to_one() {
        let (q, _) = split_quantity("0 veg pizza");
        assert_eq!(q, 1);
    }

    #[test]
    fn huge_quantity_clamps_to_one() {
        let (q, _) = split_quantity("99999999999999999999 veg pizza");
        assert_eq!(q, 1);
    }

    // --- clean_candidate ---

    #[test]
    fn punctuation_is_stripped_and_lowercased() {
        assert_eq!(clean_candidate("Veg. Pizza!!"), "veg pizza");
    }

    #[test]
    fn stop_words_are_removed_token_by_token() {
        assert_eq!(clean_candidate("2x veg momos pieces"), "2x veg momos");
        assert_eq!(clean_candidate("veg momos x"), "veg momos");
        assert_eq!(clean_candidate("pack of fries"), "of fries");
    }

    // --- extract ---

    /// Scenario: two clean segments with explicit quantities.
    #[test]
    fn extracts_quantities_and_canonical_names() {
        let candidates = extract("2 chicken burger, 1 veg momos");
        assert_eq!(
            candidates,
            vec![
                Candidate::new("chicken burger", 2),
                Candidate::new("veg momos", 1),
            ]
        );
    }

    /// Scenario: misspelled single token, no quantity — matches "veg momos"
    /// at the pinned score of 50, above the default threshold of 40.
    #[test]
    fn misspelled_fragment_defaults_quantity_and_matches() {
        let candidates = extract("momozz");
        assert_eq!(candidates, vec![Candidate::new("veg momos", 1)]);
    }

    #[test]
    fn low_confidence_segments_are_dropped() {
        let extractor = TranscriptExtractor::new(90);
        let candidates = extractor.extract("momozz", &catalog()).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn unrelated_noise_is_dropped_silently() {
        let candidates = extract("qqqqqq zzzzzz");
        assert!(candidates.is_empty());
    }

    /// Short noise fragments must not become priced lines just because they
    /// happen to sit inside a menu name ("zz" inside "veg pizza").
    #[test]
    fn tiny_noise_fragments_are_dropped() {
        let candidates = extract("2 veg momos, zz");
        assert_eq!(candidates, vec![Candidate::new("veg momos", 2)]);
    }

    #[test]
    fn empty_segments_are_skipped() {
        let candidates = extract(" , ; . 2 burrito,, ");
        assert_eq!(candidates, vec![Candidate::new("burrito", 2)]);
    }

    #[test]
    fn empty_transcript_yields_no_candidates() {
        assert!(extract("").is_empty());
        assert!(extract("  ...  ").is_empty());
    }

    #[test]
    fn segment_order_is_preserved() {
        let candidates = extract("1 vadapav. 3 french fries; 2 veg pizza");
        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["vadapav", "french fries", "veg pizza"]);
    }

    /// Duplicates are not merged — two segments naming the same item stay
    /// two candidates.
    #[test]
    fn duplicate_items_remain_separate() {
        let candidates = extract("2 burrito, 1 burrito");
        assert_eq!(
            candidates,
            vec![Candidate::new("burrito", 2), Candidate::new("burrito", 1)]
        );
    }

    /// |output| ≤ |segments| — no candidate appears without an accepted
    /// segment.
    #[test]
    fn output_never_exceeds_segment_count() {
        let text = "2 chicken burger, gibberish qq, 1 veg momos; zz";
        let segments = text
            .split([',', '.', ';'])
            .filter(|s| !s.trim().is_empty())
            .count();
        let candidates = extract(text);
        assert!(candidates.len() <= segments);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn empty_catalog_yields_no_candidates() {
        let extractor = TranscriptExtractor::default();
        let empty = MenuCatalog::new(&[]);
        let candidates = extractor.extract("2 chicken burger", &empty).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn stop_words_do_not_block_matching() {
        let candidates = extract("2 pieces veg momos");
        assert_eq!(candidates, vec![Candidate::new("veg momos", 2)]);
    }
}
