//! The persisted progress record and its fail-soft decoding.

use super::ProgressStore;
use crate::error::{PrepError, Result};
use crate::model::ItemId;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shape written to storage on every mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressRecord<'a> {
    completed_items: Vec<&'a ItemId>,
    last_updated: String,
}

/// Shape accepted when reading back. Only `completedItems` matters; a missing or
/// `null` field means nothing has been completed. Entries are checked one by one
/// so a single bad element does not cost the valid ids.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    #[serde(default)]
    completed_items: Option<Vec<serde_json::Value>>,
}

/// Serializes the completed set, ids ascending.
pub fn encode(completed: &BTreeSet<ItemId>, now: DateTime<Utc>) -> Result<String> {
    let record = ProgressRecord {
        completed_items: completed.iter().collect(),
        last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    serde_json::to_string(&record).map_err(PrepError::Serialization)
}

/// Parses a stored value. Returns `None` when the value is not a valid record.
///
/// Elements of `completedItems` that are not item ids are skipped.
pub fn decode(raw: &str) -> Option<BTreeSet<ItemId>> {
    let record = match serde_json::from_str::<StoredRecord>(raw) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse saved progress, starting empty");
            return None;
        }
    };

    let mut completed = BTreeSet::new();
    for value in record.completed_items.unwrap_or_default() {
        match value.as_u64().and_then(|n| ItemId::try_from(n).ok()) {
            Some(id) => {
                completed.insert(id);
            }
            None => tracing::warn!(%value, "Skipping invalid entry in saved progress"),
        }
    }
    Some(completed)
}

/// Reads the completed set stored under `key`.
///
/// Never fails: an absent key, an unreadable store, or a corrupt record all yield
/// an empty set.
pub fn load_completed<S: ProgressStore>(store: &S, key: &str) -> BTreeSet<ItemId> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "No saved progress found");
            return BTreeSet::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read saved progress, starting empty");
            return BTreeSet::new();
        }
    };

    let completed = decode(&raw).unwrap_or_default();
    tracing::debug!(key, count = completed.len(), "Loaded saved progress");
    completed
}

/// Writes the completed set under `key`, stamped with the current time.
pub fn save_completed<S: ProgressStore>(
    store: &S,
    key: &str,
    completed: &BTreeSet<ItemId>,
) -> Result<()> {
    let value = encode(completed, Utc::now())?;
    store.set(key, &value)?;
    tracing::debug!(key, count = completed.len(), "Saved progress");
    Ok(())
}
