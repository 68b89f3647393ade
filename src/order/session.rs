//! The order session state machine.
//!
//! One [`OrderSession`] per user: it owns the current editable draft and the
//! cumulative submitted log.  The state machine is:
//!
//! ```text
//! Empty ──load(lines)──▶ Drafting
//! Drafting ──increment/decrement/delete──▶ Drafting
//! Drafting ──delete(last line)──▶ Empty
//! Drafting ──submit()──▶ Empty        (draft appended to log atomically)
//! Empty ──submit()──▶ Err(EmptySubmission)
//! ```
//!
//! The log is append-only; no operation can corrupt it.  Each submission
//! stamps its lines with the wall-clock moment it was committed.  Nothing
//! here is shared between sessions — in a multi-user setting each user gets
//! their own instance.

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::order::OrderLine;

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Errors from order-session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// `submit` was called with an empty draft.
    #[error("nothing to submit — the current draft is empty")]
    EmptySubmission,

    /// A line operation referenced an index outside the draft.
    #[error("no order line at index {0}")]
    NoSuchLine(usize),
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Coarse session state, derived from the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No current draft.
    Empty,
    /// A non-empty draft is being edited.
    Drafting,
}

impl SessionState {
    /// A short human-readable label for status display.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Empty => "Empty",
            SessionState::Drafting => "Drafting",
        }
    }
}

// ---------------------------------------------------------------------------
// LogEntry
// ---------------------------------------------------------------------------

/// One submitted order line plus the moment its draft was committed.
///
/// All lines of a single `submit` call share the same stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub line: OrderLine,
    pub submitted_at: DateTime<Local>,
}

// ---------------------------------------------------------------------------
// OrderSession
// ---------------------------------------------------------------------------

/// Holds the current (unsubmitted) draft and the append-only submitted log.
#[derive(Debug, Default)]
pub struct OrderSession {
    current: Vec<OrderLine>,
    log: Vec<LogEntry>,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // State
    // -----------------------------------------------------------------------

    /// Current state: `Drafting` iff the draft is non-empty.
    ///
    /// Deleting the last draft line therefore transitions back to `Empty`,
    /// consistent with `submit` requiring at least one line.
    pub fn state(&self) -> SessionState {
        if self.current.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Drafting
        }
    }

    /// The current draft, in order.
    pub fn current_lines(&self) -> &[OrderLine] {
        &self.current
    }

    /// All submitted lines across every submission, in order, each stamped
    /// with its submission time.
    pub fn submitted_log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Sum of the draft's line totals.
    pub fn current_total(&self) -> u64 {
        self.current.iter().map(|l| u64::from(l.total)).sum()
    }

    /// Sum of the log's line totals across all submissions.
    pub fn grand_total(&self) -> u64 {
        self.log.iter().map(|e| u64::from(e.line.total)).sum()
    }

    // -----------------------------------------------------------------------
    // Draft mutation
    // -----------------------------------------------------------------------

    /// Replace the draft wholesale with a fresh extraction result.
    ///
    /// Any previous unsubmitted draft is discarded; the log is untouched.
    pub fn load(&mut self, lines: Vec<OrderLine>) {
        self.current = lines;
    }

    /// Increase the quantity of the line at `index` by one.
    pub fn increment(&mut self, index: usize) -> Result<(), SessionError> {
        let line = self.line_mut(index)?;
        line.set_quantity(line.quantity.saturating_add(1));
        Ok(())
    }

    /// Decrease the quantity of the line at `index` by one, floored at 1.
    ///
    /// Decrementing a quantity of 1 is a clamp, not an error.
    pub fn decrement(&mut self, index: usize) -> Result<(), SessionError> {
        let line = self.line_mut(index)?;
        line.set_quantity(line.quantity.saturating_sub(1));
        Ok(())
    }

    /// Remove the line at `index` from the draft.
    pub fn delete(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.current.len() {
            return Err(SessionError::NoSuchLine(index));
        }
        self.current.remove(index);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Atomically append the whole draft to the log and clear it.
    ///
    /// Returns the number of lines submitted.  An empty draft is rejected
    /// with [`SessionError::EmptySubmission`] — an empty line set is never
    /// silently logged, and calling `submit` twice without an intervening
    /// [`load`](Self::load) fails the second time.
    pub fn submit(&mut self) -> Result<usize, SessionError> {
        if self.current.is_empty() {
            return Err(SessionError::EmptySubmission);
        }
        let stamp = Local::now();
        let submitted = self.current.len();
        self.log.extend(self.current.drain(..).map(|line| LogEntry {
            line,
            submitted_at: stamp,
        }));
        Ok(submitted)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn line_mut(&mut self, index: usize) -> Result<&mut OrderLine, SessionError> {
        self.current
            .get_mut(index)
            .ok_or(SessionError::NoSuchLine(index))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
