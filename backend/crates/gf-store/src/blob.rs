//! Whole-collection encoding. Every collection is one JSON array stored
//! under one key; every write rewrites the entire array.

use crate::{Diagnostics, KeyValueStore, Result as StoreErrorResult};

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Decodes the collection under `key`.
///
/// Missing blobs, unreadable stores and malformed JSON all yield an empty
/// collection. The last two are logged and counted in `diagnostics`.
pub fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    diagnostics: &Diagnostics,
) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Store read failed for {key}, using empty collection: {e}");
            diagnostics.record_read_failure();
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Stored collection {key} is corrupted, using empty collection: {e}");
            diagnostics.record_decode_failure();
            Vec::new()
        }
    }
}

pub fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> StoreErrorResult<()> {
    let json = serde_json::to_string(items)?;
    store.set(key, &json)
}
