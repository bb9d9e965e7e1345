//! konnekt-match
//!
//! The compatibility engine: pairwise answer comparison, per-candidate best
//! match selection, and the ranked compatibility report. Pure and
//! synchronous; callers hand in an already-loaded snapshot.

pub mod compare;
pub mod error;
pub mod report;
pub mod select;

pub use compare::{compare_answers, compute_match, MatchScore};
pub use report::build_compatibility_report;
pub use select::{select_best_match, BestMatch, Selection};
