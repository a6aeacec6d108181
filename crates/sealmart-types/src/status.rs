use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Review status of an extension record.
///
/// Every record starts at [`Pending`](Self::Pending). The only legal
/// transitions are `Pending → Verified` and `Pending → Rejected`; both
/// target states are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionStatus {
    /// Awaiting review. The initial state of every submission.
    #[default]
    Pending,
    /// Review passed; the extension is listed as verified.
    Verified,
    /// Review failed; the extension stays listed but flagged.
    Rejected,
}

impl ExtensionStatus {
    /// Returns `true` once the status has left `Pending`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns `true` if moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Verified) | (Self::Pending, Self::Rejected)
        )
    }

    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ExtensionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtensionStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_the_default() {
        assert_eq!(ExtensionStatus::default(), ExtensionStatus::Pending);
    }

    #[test]
    fn only_pending_can_transition() {
        use ExtensionStatus::*;
        assert!(Pending.can_transition_to(Verified));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Verified.can_transition_to(Rejected));
        assert!(!Verified.can_transition_to(Pending));
        assert!(!Rejected.can_transition_to(Verified));
    }

    #[test]
    fn terminal_states() {
        assert!(!ExtensionStatus::Pending.is_terminal());
        assert!(ExtensionStatus::Verified.is_terminal());
        assert!(ExtensionStatus::Rejected.is_terminal());
    }

    #[test]
    fn wire_strings_round_trip() {
        for status in [
            ExtensionStatus::Pending,
            ExtensionStatus::Verified,
            ExtensionStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ExtensionStatus>().unwrap(), status);
        }
    }
}
