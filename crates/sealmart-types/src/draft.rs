use crate::error::TypeError;

/// Caller-supplied fields for a new submission.
///
/// Validation happens before any store interaction: a draft that fails
/// [`validate`](Self::validate) must never cause a partial write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Cleartext source code. Sealed by the codec before it leaves the
    /// client; the registry never stores this field as-is.
    pub source_code: String,
}

impl SubmissionDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        source_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            source_code: source_code.into(),
        }
    }

    /// Check required fields. `name` and `source_code` must be non-empty;
    /// `description` and `category` may be blank.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.name.trim().is_empty() {
            return Err(TypeError::MissingField { field: "name" });
        }
        if self.source_code.is_empty() {
            return Err(TypeError::MissingField { field: "source_code" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_validates() {
        let draft = SubmissionDraft::new("X", "", "", "code");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn missing_name_is_rejected() {
        let draft = SubmissionDraft::new("  ", "d", "c", "code");
        assert_eq!(
            draft.validate().unwrap_err(),
            TypeError::MissingField { field: "name" }
        );
    }

    #[test]
    fn missing_source_is_rejected() {
        let draft = SubmissionDraft::new("X", "d", "c", "");
        assert_eq!(
            draft.validate().unwrap_err(),
            TypeError::MissingField { field: "source_code" }
        );
    }
}
