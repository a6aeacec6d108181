use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::traits::KeyValueStore;

/// In-memory, HashMap-based key-value store.
///
/// Intended for tests and embedding. All values are held behind a `RwLock`
/// and cloned on read. Extra controls exist for exercising failure paths:
/// the availability flag, per-key and per-prefix write faults that make
/// `set` fail, and per-key read faults that make `get` fail at the
/// transport level.
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    write_faults: RwLock<HashSet<String>>,
    write_prefix_faults: RwLock<HashSet<String>>,
    read_faults: RwLock<HashSet<String>>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store that reports itself available.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
            write_faults: RwLock::new(HashSet::new()),
            write_prefix_faults: RwLock::new(HashSet::new()),
            read_faults: RwLock::new(HashSet::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no key holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.read().expect("lock poisoned").is_empty()
    }

    /// Sorted list of all keys currently stored.
    pub fn keys(&self) -> Vec<String> {
        let map = self.values.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Flip the availability probe. While `false`, `is_available` reports
    /// the store as unreachable; `get`/`set` still work, mirroring a remote
    /// whose health endpoint lags behind its data plane.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make every subsequent `set` on `key` fail with `WriteRejected`.
    pub fn fail_writes_to(&self, key: impl Into<String>) {
        self.write_faults
            .write()
            .expect("lock poisoned")
            .insert(key.into());
    }

    /// Make every subsequent `set` on a key starting with `prefix` fail
    /// with `WriteRejected`. Useful when the exact key is generated by the
    /// caller and not known in advance.
    pub fn fail_writes_with_prefix(&self, prefix: impl Into<String>) {
        self.write_prefix_faults
            .write()
            .expect("lock poisoned")
            .insert(prefix.into());
    }

    /// Make every subsequent `get` on `key` fail with `Transport`,
    /// mimicking a remote whose read path is down for that key.
    pub fn fail_reads_to(&self, key: impl Into<String>) {
        self.read_faults
            .write()
            .expect("lock poisoned")
            .insert(key.into());
    }

    /// Clear all injected write faults, exact and prefix.
    pub fn clear_write_faults(&self) {
        self.write_faults.write().expect("lock poisoned").clear();
        self.write_prefix_faults
            .write()
            .expect("lock poisoned")
            .clear();
    }

    /// Clear all injected read faults.
    pub fn clear_read_faults(&self) {
        self.read_faults.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        {
            let faults = self.read_faults.read().expect("lock poisoned");
            if faults.contains(key) {
                return Err(StoreError::Transport(format!(
                    "injected read fault on {key}"
                )));
            }
        }
        let map = self.values.read().expect("lock poisoned");
        Ok(map.get(key).cloned().unwrap_or_default())
    }

    async fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        {
            let faults = self.write_faults.read().expect("lock poisoned");
            let prefixes = self.write_prefix_faults.read().expect("lock poisoned");
            if faults.contains(key) || prefixes.iter().any(|p| key.starts_with(p)) {
                return Err(StoreError::WriteRejected {
                    key: key.to_string(),
                    reason: "injected write fault".to_string(),
                });
            }
        }
        let mut map = self.values.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for InMemoryKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKeyValueStore")
            .field("key_count", &self.len())
            .field("available", &self.available.load(Ordering::SeqCst))
            .finish()
    }
}
