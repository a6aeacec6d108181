use std::sync::Arc;

use tracing::{debug, warn};

use sealmart_codec::{decode_index, decode_record, record_key, INDEX_KEY};
use sealmart_store::KeyValueStore;
use sealmart_types::{ExtensionId, ExtensionRecord};

use crate::error::{RegistryError, RegistryResult};

/// Read side of the registry: enumerate what the index reaches.
///
/// Every read path is fail-soft. A dangling index entry, an undecodable
/// record, or a malformed index reduces the result instead of aborting it;
/// the only hard precondition is the store's availability probe, and even
/// that turns into an empty result rather than an error.
#[derive(Clone)]
pub struct RegistryReader {
    store: Arc<dyn KeyValueStore>,
}

impl RegistryReader {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Probe the store's health before a read batch.
    pub async fn check_available(&self) -> RegistryResult<()> {
        if self.store.is_available().await {
            Ok(())
        } else {
            Err(RegistryError::StoreUnavailable)
        }
    }

    /// Load every record reachable through the key index, newest first.
    ///
    /// Idempotent and side-effect free. Two calls can disagree if the store
    /// changed in between; no cache is kept across calls.
    pub async fn load_all(&self) -> Vec<ExtensionRecord> {
        if self.check_available().await.is_err() {
            warn!("store unavailable, returning empty catalog");
            return Vec::new();
        }

        let index = self.load_index().await;
        let mut records = Vec::with_capacity(index.len());
        for id in index {
            // Per-item isolation: one bad key must not sink the rest.
            match self.load(&id).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => debug!(id = %id, "dangling index entry, skipping"),
                Err(e) => warn!(id = %id, error = %e, "skipping unreadable record"),
            }
        }

        // Stable sort: records sharing a timestamp keep index order.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    }

    /// Fetch one record directly by id, bypassing the index.
    ///
    /// Returns `Ok(None)` when nothing is stored under the id's key. This
    /// is the one way to reach an orphaned record.
    pub async fn load(&self, id: &ExtensionId) -> RegistryResult<Option<ExtensionRecord>> {
        let bytes = self.store.get(&record_key(id)).await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        let record = decode_record(id.clone(), &bytes)?;
        Ok(Some(record))
    }

    async fn load_index(&self) -> Vec<ExtensionId> {
        let bytes = match self.store.get(INDEX_KEY).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "key index fetch failed, treating as empty");
                return Vec::new();
            }
        };
        match decode_index(&bytes) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "malformed key index, treating as empty");
                Vec::new()
            }
        }
    }
}
