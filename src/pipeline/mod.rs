//! Order-processing pipeline.
//!
//! [`OrderPipeline`] drives one order attempt end to end:
//! audio → transcript → candidates → priced lines.  See
//! [`runner`] for the orchestrator itself and [`PipelineError`] for the
//! error taxonomy surfaced to the caller.

pub mod runner;

pub use runner::{OrderPipeline, PipelineError};
