//! Key naming convention for the backing store.
//!
//! The store has no native "list all keys" operation, so the set of known
//! records is kept as an index value under a fixed key. Record keys share a
//! prefix with the index key; the reserved id check in `sealmart-types`
//! keeps the two namespaces from colliding.

use sealmart_types::ExtensionId;

/// Fixed key holding the JSON array of all known record ids.
pub const INDEX_KEY: &str = "extension_keys";

/// Prefix shared by every record key.
pub const RECORD_KEY_PREFIX: &str = "extension_";

/// The store key for a record id: `"extension_" + id`.
pub fn record_key(id: &ExtensionId) -> String {
    format!("{RECORD_KEY_PREFIX}{id}")
}
