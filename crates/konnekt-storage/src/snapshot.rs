use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use konnekt_core::models::{AssessmentResult, User};
use konnekt_core::storage_keys;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Every user and result in the store at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub results: Vec<AssessmentResult>,
}

impl Snapshot {
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn result(&self, id: &str) -> Option<&AssessmentResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Results belonging to `user_id`, in stored order.
    pub fn results_for<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a AssessmentResult> {
        self.results.iter().filter(move |r| r.user_id == user_id)
    }
}

/// Load users and results.
///
/// Missing keys read as empty collections. Entries that fail to deserialize
/// are dropped with a warning so one bad record does not hide the rest.
pub fn load_snapshot(store: &KeyValueStore) -> Result<Snapshot, StorageError> {
    let users: Vec<User> = load_records(store, storage_keys::USERS)?;
    let results: Vec<AssessmentResult> = load_records(store, storage_keys::ASSESSMENT_RESULTS)?;
    info!(
        users = users.len(),
        results = results.len(),
        dir = %store.dir().display(),
        "snapshot loaded"
    );
    Ok(Snapshot { users, results })
}

/// Append a result to the stored array, leaving existing entries untouched.
pub fn append_result(store: &KeyValueStore, result: &AssessmentResult) -> Result<(), StorageError> {
    let key = storage_keys::ASSESSMENT_RESULTS;
    let mut entries = load_array(store, key)?;
    entries.push(serde_json::to_value(result)?);
    store.save_state(key, &entries)?;
    info!(result_id = %result.id, user_id = %result.user_id, "result appended");
    Ok(())
}

fn load_array(store: &KeyValueStore, key: &str) -> Result<Vec<Value>, StorageError> {
    match store.load_state::<Value>(key)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries),
        Some(_) => Err(StorageError::NotAnArray {
            key: key.to_string(),
        }),
    }
}

fn load_records<T: DeserializeOwned>(
    store: &KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StorageError> {
    let mut records = Vec::new();
    for (index, entry) in load_array(store, key)?.into_iter().enumerate() {
        match serde_json::from_value(entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!(key, index, error = %e, "dropping malformed record"),
        }
    }
    Ok(records)
}
