//! Menu catalog and fuzzy name matching.
//!
//! [`MenuCatalog`] is the fixed item→price lookup table, built once at
//! startup and never mutated afterwards — it is the only state shared
//! between concurrent order sessions, and it is shared read-only.
//!
//! [`matcher::best_match`] reconciles noisy candidate strings against the
//! catalog's name list with an integer 0–100 confidence score.

pub mod catalog;
pub mod matcher;

pub use catalog::MenuCatalog;
pub use matcher::{best_match, similarity, Match};
