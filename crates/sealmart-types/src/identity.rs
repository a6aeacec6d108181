use std::fmt;

use serde::{Deserialize, Serialize};

/// Address-like signing identity of a caller.
///
/// The registry treats this as an opaque string: it is recorded as the
/// `developer` of a submission and compared for equality when authorizing a
/// status transition. No checksum or format validation is performed here —
/// the wallet collaborator owns address semantics.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display: `0x1234…cdef` style.
    pub fn short(&self) -> String {
        if !self.0.is_ascii() || self.0.len() <= 10 {
            return self.0.clone();
        }
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.short())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
