//! quickorder — voice food-order extraction and reconciliation.
//!
//! Turns a spoken multi-item order ("two chicken burgers, five veg pizzas")
//! into a validated, priced order-line table against a fixed menu, robust to
//! mis-transcription, misspelling and formatting noise.
//!
//! # Pipeline
//!
//! ```text
//! audio ──▶ Transcriber (external) ──▶ transcript
//!
//! transcript ──▶ TranscriptExtractor ─┐
//!                                     ├─▶ candidates ──▶ build_lines ──▶ OrderLine table
//! transcript ──▶ ItemInference ──▶ reply ──▶ ReplyExtractor ─┘
//! ```
//!
//! Two extraction strategies exist behind the same [`extract::ItemExtractor`]
//! seam, selected by [`config::ExtractionMode`]:
//!
//! * **Transcript** — punctuation/numeral heuristics directly on the raw
//!   transcript; low-confidence segments are silently dropped.
//! * **Assisted** — an LLM proposes an item→quantity JSON object; unmatched
//!   names are kept raw at price 0 rather than dropped.
//!
//! The resulting lines are loaded into an [`order::OrderSession`], which
//! supports quantity adjustment, deletion and atomic submission into an
//! append-only log.

pub mod config;
pub mod extract;
pub mod menu;
pub mod order;
pub mod pipeline;
pub mod remote;
