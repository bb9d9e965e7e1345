//! konnekt-core
//!
//! Pure domain types for assessment results and compatibility reports, plus
//! the local-storage key conventions. No I/O — this is the shared vocabulary
//! of the Konnekt crates.

pub mod error;
pub mod models;
pub mod ratio;
pub mod storage_keys;
