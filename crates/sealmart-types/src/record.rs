use std::time::{SystemTime, UNIX_EPOCH};

use crate::id::ExtensionId;
use crate::identity::Identity;
use crate::status::ExtensionStatus;

/// Current wall-clock time as whole seconds since the UNIX epoch.
pub fn now_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// One submitted extension, as held in memory.
///
/// The authoritative copy lives in the remote key-value store; this value is
/// a transient decode that is valid for the duration of one load or write
/// cycle. `downloads` and `rating` are read-only passthrough — no operation
/// in the registry core mutates them.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionRecord {
    /// Store key, not part of the serialized record body.
    pub id: ExtensionId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Identity of the submitter.
    pub developer: Identity,
    /// Sealed source code. Opaque to the registry core.
    pub encrypted_code: String,
    /// Creation time in seconds since epoch. Never mutated.
    pub timestamp: u64,
    pub status: ExtensionStatus,
    pub downloads: u64,
    pub rating: f64,
}

impl ExtensionRecord {
    /// Build a fresh record for a new submission.
    ///
    /// Status starts at `Pending`, counters at zero, timestamp at now.
    pub fn new_submission(
        id: ExtensionId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        developer: Identity,
        encrypted_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category: category.into(),
            developer,
            encrypted_code: encrypted_code.into(),
            timestamp: now_seconds(),
            status: ExtensionStatus::Pending,
            downloads: 0,
            rating: 0.0,
        }
    }
}
