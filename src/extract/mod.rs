//! Order-candidate extraction strategies.
//!
//! This module provides:
//! * [`Candidate`] — a reconciled (name, quantity) pair ready for pricing.
//! * [`ItemExtractor`] — the strategy seam both variants implement.
//! * [`TranscriptExtractor`] — punctuation/numeral heuristics on the raw
//!   transcript; drops low-confidence segments.
//! * [`ReplyExtractor`] — parses the JSON object embedded in an LLM reply;
//!   keeps low-confidence names raw instead of dropping them.
//! * [`extract_first_json_object`] — the brace-scanning slice with a
//!   documented failure contract.
//! * [`ExtractError`] — error variants for the assisted variant.

pub mod reply;
pub mod transcript;

use thiserror::Error;

use crate::menu::MenuCatalog;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use reply::{extract_first_json_object, ReplyExtractor};
pub use transcript::TranscriptExtractor;

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A provisional order item after catalog reconciliation: the canonical menu
/// name (or, in the assisted variant, the raw text when no confident match
/// exists) and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Canonical menu name, or raw candidate text if unmatched.
    pub name: String,
    /// Ordered quantity, always ≥ 1.
    pub quantity: u32,
}

impl Candidate {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

// ---------------------------------------------------------------------------
// ExtractError
// ---------------------------------------------------------------------------

/// Errors from candidate extraction.
///
/// Only the assisted variant produces errors — malformed model output must
/// surface to the caller rather than become a silent empty order.  The
/// transcript variant recovers locally by dropping low-confidence segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The reply contains no `{` … `}` pair to extract.
    #[error("reply contains no JSON object")]
    NoJsonObject,

    /// The brace-delimited substring is not valid JSON.
    #[error("embedded JSON could not be parsed: {0}")]
    MalformedJson(String),

    /// The embedded JSON parsed, but is not an object.
    #[error("embedded JSON is not an object")]
    NotAnObject,

    /// A quantity value is missing, negative, zero, or not an integer.
    #[error("quantity for item {item:?} is not a positive integer")]
    BadQuantity { item: String },
}

// ---------------------------------------------------------------------------
// ItemExtractor trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe extraction strategy.
///
/// Both variants reduce a text (raw transcript or LLM reply) to an ordered
/// candidate list against the same catalog, so the order-line builder and
/// everything downstream is shared.
pub trait ItemExtractor: Send + Sync {
    /// Extract ordered candidates from `text`, reconciled against `catalog`.
    fn extract(&self, text: &str, catalog: &MenuCatalog) -> Result<Vec<Candidate>, ExtractError>;
}

// Compile-time assertion: Box<dyn ItemExtractor> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn ItemExtractor>) {}
};
