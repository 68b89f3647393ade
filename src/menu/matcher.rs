//! Approximate string matching for menu-name reconciliation.
//!
//! The scorer combines two Levenshtein-based ratios:
//!
//! * **full ratio** — normalised edit distance over the whole strings;
//! * **partial ratio** — the shorter string slid over every equal-length
//!   window of the longer one, keeping the best window's ratio, scaled
//!   down WRatio-style when the lengths are far apart.
//!
//! Taking the max of the two lets fragments of menu names score high
//! ("momos" inside "veg momos" scores 90) — users say fragments of menu
//! names far more often than whole ones.  Fragments shorter than three
//! characters never use the partial ratio: a two-letter window matches
//! some menu name by accident almost every time.
//!
//! Scores are deterministic integers in 0..=100; ties between universe
//! entries break to the earliest entry.

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// Result of a successful [`best_match`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The canonical name from the universe that scored highest.
    pub name: String,
    /// Confidence score, 0..=100.
    pub score: u8,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Shortest fragment eligible for partial-ratio scoring.
const MIN_FRAGMENT_LEN: usize = 3;

/// Length ratio beyond which the partial ratio is scaled down.
const LENGTH_GAP: f64 = 1.5;

/// Scale applied to the partial ratio past [`LENGTH_GAP`].
const GAP_SCALE: f64 = 0.9;

/// Similarity between two strings as an integer 0..=100.
///
/// `max(full_ratio, partial_ratio)` — see the module docs.  Both empty
/// strings score 100; one empty string scores 0.
///
/// ```
/// use quickorder::menu::similarity;
///
/// assert_eq!(similarity("veg pizza", "veg pizza"), 100);
/// assert_eq!(similarity("veg momo", "veg momos"), 100); // near-length substring
/// assert_eq!(similarity("momos", "veg momos"), 90);     // short fragment, scaled
/// assert_eq!(similarity("", "veg pizza"), 0);
/// ```
pub fn similarity(a: &str, b: &str) -> u8 {
    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let full = (strsim::normalized_levenshtein(a, b) * 100.0).round() as u8;
    full.max(partial_ratio(a, b))
}

/// Best ratio of the shorter string against every window of the longer one,
/// scaled down when the length gap is large.
fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    let n = short.len();
    if n < MIN_FRAGMENT_LEN {
        return 0;
    }

    let mut best = 0.0_f64;
    for window in long.windows(n) {
        let dist = strsim::generic_levenshtein(&window.to_vec(), &short);
        let ratio = 100.0 * (1.0 - dist as f64 / n as f64);
        if ratio > best {
            best = ratio;
            if dist == 0 {
                break;
            }
        }
    }

    // Length-gap penalty: a window hit by a much shorter string is weaker
    // evidence than one between similar-length strings.
    if long.len() as f64 / n as f64 > LENGTH_GAP {
        best *= GAP_SCALE;
    }
    best.round() as u8
}

// ---------------------------------------------------------------------------
// best_match
// ---------------------------------------------------------------------------

/// Return the single highest-scoring universe entry for `candidate`.
///
/// Ties break to the first occurrence in the universe's listed order.
/// Returns `None` only when the universe is empty.
pub fn best_match(candidate: &str, universe: &[String]) -> Option<Match> {
    let mut best: Option<Match> = None;
    for name in universe {
        let score = similarity(candidate, name);
        match &best {
            Some(m) if score <= m.score => {}
            _ => {
                best = Some(Match {
                    name: name.clone(),
                    score,
                })
            }
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
