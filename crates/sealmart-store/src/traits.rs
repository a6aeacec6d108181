use async_trait::async_trait;

use crate::error::StoreResult;

/// Remote key-value store holding the registry's records and key index.
///
/// All implementations must satisfy these invariants:
/// - `get` on an absent or unknown key returns zero-length bytes, not an
///   error. An `Err` from `get` means the transport itself failed.
/// - `set` replaces the whole value under one key. There is no multi-key
///   atomicity; two dependent writes can be observed half-applied.
/// - Once `set` has been issued it cannot be aborted; a caller that stops
///   waiting has not rolled anything back.
/// - `is_available` is a cheap health probe, consulted before read batches.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. Absent keys read as empty.
    async fn get(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Whether the store currently reports itself reachable.
    async fn is_available(&self) -> bool;
}
