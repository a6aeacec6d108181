use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The one id value that can never be used for a record.
///
/// Record keys are built as `"extension_" + id`, and the key index itself
/// lives at `"extension_keys"` — an id equal to `"keys"` would collide with
/// the index key.
pub const RESERVED_ID: &str = "keys";

/// Opaque key for an extension record.
///
/// Ids are caller-generated, not store-generated. [`ExtensionId::generate`]
/// produces a UUID v7: the millisecond time prefix gives
/// monotonically-increasing-enough ordering, the random suffix makes
/// collisions between uncoordinated concurrent submitters negligible.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionId(String);

impl ExtensionId {
    /// Generate a fresh time-ordered id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap an existing id string, rejecting empty and reserved values.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::EmptyId);
        }
        if id == RESERVED_ID {
            return Err(TypeError::ReservedId(id));
        }
        Ok(Self(id))
    }

    /// Wrap a string that arrived from the store without validation.
    ///
    /// Used on the decode path: ids already present in the remote index are
    /// taken as-is so that a historically odd id does not break enumeration.
    pub fn from_wire(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 characters) for display.
    pub fn short_id(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Debug for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtensionId({})", self.short_id())
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_distinct_ids() {
        let a = ExtensionId::generate();
        let b = ExtensionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_ids_are_time_ordered() {
        // UUID v7 sorts by creation time at millisecond granularity; two ids
        // generated back to back never sort the wrong way around.
        let a = ExtensionId::generate();
        let b = ExtensionId::generate();
        assert!(a <= b);
    }

    #[test]
    fn reserved_id_is_rejected() {
        let err = ExtensionId::new("keys").unwrap_err();
        assert_eq!(err, TypeError::ReservedId("keys".into()));
    }

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(ExtensionId::new("").unwrap_err(), TypeError::EmptyId);
    }

    #[test]
    fn serde_is_transparent() {
        let id = ExtensionId::new("ext-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ext-1\"");
        let back: ExtensionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
