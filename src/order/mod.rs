//! Priced order lines and the editable order session.
//!
//! [`build_lines`] prices reconciled candidates into [`OrderLine`]s;
//! [`OrderSession`] holds the current editable draft and the append-only
//! submitted log.

pub mod line;
pub mod session;

pub use line::{build_lines, OrderLine};
pub use session::{LogEntry, OrderSession, SessionError, SessionState};
