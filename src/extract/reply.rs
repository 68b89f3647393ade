//! LLM-assisted parsing — the structured-reply extraction variant.
//!
//! The inference collaborator replies with free text expected to embed
//! exactly one JSON object mapping item names to quantities, possibly
//! surrounded by explanatory prose or formatting artifacts.  The object is
//! located by brace-scanning ([`extract_first_json_object`]), parsed
//! strictly, and its keys reconciled against the menu.
//!
//! Unlike the transcript variant, low-confidence names are **kept** with
//! their raw text (they price to 0 downstream) instead of being dropped:
//! assisted inference is assumed higher-precision on item identity and
//! lower-precision on exact menu wording.

use crate::extract::{Candidate, ExtractError, ItemExtractor};
use crate::menu::MenuCatalog;

// ---------------------------------------------------------------------------
// extract_first_json_object
// ---------------------------------------------------------------------------

/// Slice out the substring from the first `{` to the last `}` (inclusive).
///
/// # Failure contract
///
/// Returns [`ExtractError::NoJsonObject`] when either brace is missing or
/// the last `}` precedes the first `{`.  The returned slice is **not**
/// validated as JSON — that is the caller's job.
///
/// ```
/// use quickorder::extract::extract_first_json_object;
///
/// let reply = r#"Here is the result: {"Momos": 3} Enjoy!"#;
/// assert_eq!(extract_first_json_object(reply).unwrap(), r#"{"Momos": 3}"#);
/// assert!(extract_first_json_object("no braces here").is_err());
/// ```
pub fn extract_first_json_object(text: &str) -> Result<&str, ExtractError> {
    let first = text.find('{').ok_or(ExtractError::NoJsonObject)?;
    let last = text.rfind('}').ok_or(ExtractError::NoJsonObject)?;
    if last < first {
        return Err(ExtractError::NoJsonObject);
    }
    Ok(&text[first..=last])
}

// ---------------------------------------------------------------------------
// ReplyExtractor
// ---------------------------------------------------------------------------

/// Extractor over an inference collaborator's free-text reply.
#[derive(Debug, Clone)]
pub struct ReplyExtractor {
    threshold: u8,
}

impl ReplyExtractor {
    /// Create an extractor with the given fuzzy acceptance threshold (0–100).
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl Default for ReplyExtractor {
    fn default() -> Self {
        Self::new(crate::config::MatchConfig::default().assisted_threshold)
    }
}

impl ItemExtractor for ReplyExtractor {
    fn extract(&self, text: &str, catalog: &MenuCatalog) -> Result<Vec<Candidate>, ExtractError> {
        let json_str = extract_first_json_object(text)?;

        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| ExtractError::MalformedJson(e.to_string()))?;
        let object = value.as_object().ok_or(ExtractError::NotAnObject)?;

        let mut out = Vec::with_capacity(object.len());
        for (key, quantity) in object {
            // Quantities must be positive integers; anything else means the
            // upstream model misbehaved and is reported, not coerced.
            let quantity = quantity
                .as_u64()
                .and_then(|q| u32::try_from(q).ok())
                .filter(|q| *q >= 1)
                .ok_or_else(|| ExtractError::BadQuantity { item: key.clone() })?;

            let name = match catalog.best_match(&key.to_lowercase()) {
                Some(m) if m.score >= self.threshold => m.name,
                // Below threshold (or empty catalog): keep the raw key text;
                // it prices to 0 at build time.
                _ => key.clone(),
            };

            out.push(Candidate::new(name, quantity));
        }

        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
