//! Pipeline orchestrator — drives one order attempt end to end.
//!
//! ```text
//! process_audio(wav)
//!   └─▶ transcriber.transcribe(wav) ──▶ transcript
//!         └─▶ process_transcript(transcript)
//!
//! process_transcript(text)
//!   ├─ Transcript mode ─▶ TranscriptExtractor ──▶ candidates
//!   └─ Assisted mode   ─▶ inference.infer_items ─▶ ReplyExtractor ─▶ candidates
//!                                 └─▶ build_lines ──▶ Vec<OrderLine>
//! ```
//!
//! One blocking attempt per order: no retry, no partial results.  A failed
//! attempt returns an error and touches nothing — loading the resulting
//! lines into an [`OrderSession`](crate::order::OrderSession) is the
//! caller's decision.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{AppConfig, ExtractionMode};
use crate::extract::{ExtractError, ItemExtractor, ReplyExtractor, TranscriptExtractor};
use crate::menu::MenuCatalog;
use crate::order::{build_lines, OrderLine};
use crate::remote::{ItemInference, RemoteError, Transcriber};

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors that can surface from one order attempt.
///
/// Every variant renders a human-readable message so the UI layer can show
/// it without knowing the internal cause.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The transcription collaborator was unreachable or answered badly.
    #[error("transcription failed: {0}")]
    Transcription(RemoteError),

    /// The item-inference collaborator was unreachable or answered badly.
    #[error("item inference failed: {0}")]
    Inference(RemoteError),

    /// The inference reply could not be turned into candidates.
    #[error("order extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    /// Transcription produced no usable text.
    #[error("transcription produced no text")]
    EmptyTranscript,
}

// ---------------------------------------------------------------------------
// OrderPipeline
// ---------------------------------------------------------------------------

/// Drives the complete order-extraction pipeline.
///
/// Holds the read-only catalog and the two collaborators behind
/// `Arc<dyn …>`; the extraction strategy is fixed at construction from the
/// configured [`ExtractionMode`].
pub struct OrderPipeline {
    catalog: Arc<MenuCatalog>,
    transcriber: Arc<dyn Transcriber>,
    inference: Arc<dyn ItemInference>,
    mode: ExtractionMode,
    transcript_extractor: TranscriptExtractor,
    reply_extractor: ReplyExtractor,
}

impl OrderPipeline {
    /// Create a new pipeline.
    ///
    /// # Arguments
    ///
    /// * `catalog`     — shared read-only menu catalog.
    /// * `transcriber` — speech-to-text collaborator.
    /// * `inference`   — item-inference collaborator (Assisted mode only).
    /// * `config`      — supplies the mode and the match thresholds.
    pub fn new(
        catalog: Arc<MenuCatalog>,
        transcriber: Arc<dyn Transcriber>,
        inference: Arc<dyn ItemInference>,
        config: &AppConfig,
    ) -> Self {
        Self {
            catalog,
            transcriber,
            inference,
            mode: config.mode,
            transcript_extractor: TranscriptExtractor::new(config.matching.transcript_threshold),
            reply_extractor: ReplyExtractor::new(config.matching.assisted_threshold),
        }
    }

    /// The catalog this pipeline prices against.
    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    // -----------------------------------------------------------------------
    // Order attempts
    // -----------------------------------------------------------------------

    /// Run one attempt from recorded WAV bytes.
    pub async fn process_audio(&self, wav: &[u8]) -> Result<Vec<OrderLine>, PipelineError> {
        let transcript = self
            .transcriber
            .transcribe(wav)
            .await
            .map_err(PipelineError::Transcription)?;

        log::info!("pipeline: transcript = {transcript:?}");
        self.process_transcript(&transcript).await
    }

    /// Run one attempt from an existing transcript.
    pub async fn process_transcript(&self, text: &str) -> Result<Vec<OrderLine>, PipelineError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PipelineError::EmptyTranscript);
        }

        let candidates = match self.mode {
            ExtractionMode::Transcript => {
                self.transcript_extractor.extract(text, &self.catalog)?
            }
            ExtractionMode::Assisted => {
                let reply = self
                    .inference
                    .infer_items(text)
                    .await
                    .map_err(PipelineError::Inference)?;
                log::debug!("pipeline: inference reply = {reply:?}");
                self.reply_extractor.extract(&reply, &self.catalog)?
            }
        };

        log::debug!("pipeline: {} candidate(s) extracted", candidates.len());
        Ok(build_lines(candidates, &self.catalog))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
