//! Local-storage key conventions.
//!
//! These are the keys the portal writes into browser local storage. A
//! snapshot directory holds one `<key>.json` file per key.

pub const USERS: &str = "users";

pub const ASSESSMENT_RESULTS: &str = "assessmentResults";

/// File name backing a key in a snapshot directory.
pub fn file_name(key: &str) -> String {
    format!("{key}.json")
}
