//! konnekt-storage
//!
//! Local key-value snapshot of the portal's browser storage. Thin wrapper
//! around a directory of JSON files, one per storage key.

pub mod error;
pub mod snapshot;
pub mod store;
