use std::sync::Arc;

use tracing::{debug, warn};

use sealmart_codec::{
    decode_index, decode_record, encode_index, encode_record, record_key, CodeSealer, INDEX_KEY,
};
use sealmart_identity::SigningIdentityProvider;
use sealmart_store::KeyValueStore;
use sealmart_types::{ExtensionId, ExtensionRecord, ExtensionStatus, SubmissionDraft};

use crate::error::{RegistryError, RegistryResult};

/// Write side of the registry: submissions and review verdicts.
///
/// Both operations check the signing identity before touching the store and
/// are fail-loud from there on. A submit is two dependent single-key writes
/// with no transaction around them; see the crate docs for the accepted
/// inconsistency windows.
#[derive(Clone)]
pub struct RegistryWriter {
    store: Arc<dyn KeyValueStore>,
    identity: Arc<dyn SigningIdentityProvider>,
    sealer: Arc<dyn CodeSealer>,
}

impl RegistryWriter {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        identity: Arc<dyn SigningIdentityProvider>,
        sealer: Arc<dyn CodeSealer>,
    ) -> Self {
        Self {
            store,
            identity,
            sealer,
        }
    }

    /// Submit a new extension. Returns the freshly assigned id.
    ///
    /// Order of operations: auth check, draft validation (both before any
    /// store interaction), seal, record write, then index append against a
    /// freshly read index. Success is reported only after the index write;
    /// an [`RegistryError::IndexWrite`] failure means the record was stored
    /// but is orphaned.
    pub async fn submit(&self, draft: &SubmissionDraft) -> RegistryResult<ExtensionId> {
        let developer = self.identity.current().ok_or(RegistryError::AuthRequired)?;
        draft.validate()?;

        let sealed = self.sealer.seal(&draft.source_code);
        let id = ExtensionId::generate();
        let record = ExtensionRecord::new_submission(
            id.clone(),
            draft.name.clone(),
            draft.description.clone(),
            draft.category.clone(),
            developer,
            sealed,
        );

        let body = encode_record(&record)?;
        self.store
            .set(&record_key(&id), &body)
            .await
            .map_err(RegistryError::RecordWrite)?;
        debug!(id = %id, name = %record.name, "record written, appending to index");

        self.append_to_index(&id).await?;
        debug!(id = %id, "submission complete");
        Ok(id)
    }

    /// Apply a review verdict to a pending record.
    ///
    /// The caller must be the record's developer, and the record must still
    /// be pending; `new_status` must be one of the two terminal states. A
    /// single read-modify-write on the record key — the index is untouched.
    pub async fn set_status(
        &self,
        id: &ExtensionId,
        new_status: ExtensionStatus,
    ) -> RegistryResult<()> {
        let caller = self.identity.current().ok_or(RegistryError::AuthRequired)?;

        let key = record_key(id);
        let bytes = self.store.get(&key).await?;
        if bytes.is_empty() {
            return Err(RegistryError::NotFound(id.clone()));
        }
        // A targeted mutation on an undecodable record is loud, unlike the
        // reader's per-item skip.
        let mut record = decode_record(id.clone(), &bytes)?;

        if record.developer != caller {
            return Err(RegistryError::NotAuthorized {
                id: id.clone(),
                caller,
            });
        }
        if !record.status.can_transition_to(new_status) {
            return Err(RegistryError::IllegalTransition {
                id: id.clone(),
                from: record.status,
                to: new_status,
            });
        }

        record.status = new_status;
        let body = encode_record(&record)?;
        self.store
            .set(&key, &body)
            .await
            .map_err(RegistryError::RecordWrite)?;
        debug!(id = %id, status = %new_status, "status transition applied");
        Ok(())
    }

    /// Read the latest index, append `id`, and write it back.
    ///
    /// The read is always fresh — never a copy cached from an earlier load —
    /// to shrink (not close) the lost-update window between concurrent
    /// submitters. A malformed stored index falls back to empty, matching
    /// the reader's posture, so a corrupt index never blocks submission.
    async fn append_to_index(&self, id: &ExtensionId) -> RegistryResult<()> {
        let bytes = self
            .store
            .get(INDEX_KEY)
            .await
            .map_err(|source| RegistryError::IndexWrite {
                id: id.clone(),
                source,
            })?;
        let mut ids = match decode_index(&bytes) {
            Ok(ids) => ids,
            Err(e) => {
                warn!(error = %e, "malformed key index during submit, rebuilding from empty");
                Vec::new()
            }
        };
        ids.push(id.clone());

        let encoded = encode_index(&ids)?;
        self.store
            .set(INDEX_KEY, &encoded)
            .await
            .map_err(|source| RegistryError::IndexWrite {
                id: id.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealmart_codec::HexSealer;
    use sealmart_identity::StaticIdentityProvider;
    use sealmart_store::InMemoryKeyValueStore;
    use sealmart_types::{now_seconds, Identity};

    use crate::reader::RegistryReader;

    struct Fixture {
        store: Arc<InMemoryKeyValueStore>,
        identity: Arc<StaticIdentityProvider>,
        writer: RegistryWriter,
        reader: RegistryReader,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let identity = Arc::new(StaticIdentityProvider::connected(Identity::new("0xAAA")));
        let writer = RegistryWriter::new(store.clone(), identity.clone(), Arc::new(HexSealer));
        let reader = RegistryReader::new(store.clone());
        Fixture {
            store,
            identity,
            writer,
            reader,
        }
    }

    fn draft(name: &str) -> SubmissionDraft {
        SubmissionDraft::new(name, "does things", "productivity", "let x = 1;")
    }

    // ---- Test 1: End-to-end submit produces one indexed pending record ----
    #[tokio::test]
    async fn submit_end_to_end() {
        let f = fixture();
        let before = now_seconds();
        let id = f.writer.submit(&draft("X")).await.unwrap();
        let after = now_seconds();

        let loaded = f.reader.load_all().await;
        assert_eq!(loaded.len(), 1);
        let record = &loaded[0];
        assert_eq!(record.id, id);
        assert_eq!(record.name, "X");
        assert_eq!(record.status, ExtensionStatus::Pending);
        assert_eq!(record.developer, Identity::new("0xAAA"));
        assert_eq!(record.downloads, 0);
        assert_eq!(record.rating, 0.0);
        assert!(record.timestamp >= before && record.timestamp <= after);

        // Exactly two keys: the index and the record.
        assert_eq!(f.store.len(), 2);
    }

    // ---- Test 2: Sealed code is deterministic and not cleartext ----
    #[tokio::test]
    async fn submit_seals_the_source() {
        let f = fixture();
        let id = f.writer.submit(&draft("X")).await.unwrap();
        let record = f.reader.load(&id).await.unwrap().unwrap();
        assert_ne!(record.encrypted_code, "let x = 1;");
        assert_eq!(record.encrypted_code, HexSealer.seal("let x = 1;"));
    }

    // ---- Test 3: Repeated submits keep distinct ids and grow the index ----
    #[tokio::test]
    async fn submit_assigns_fresh_ids() {
        let f = fixture();
        let a = f.writer.submit(&draft("A")).await.unwrap();
        let b = f.writer.submit(&draft("B")).await.unwrap();
        let c = f.writer.submit(&draft("C")).await.unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(f.reader.load_all().await.len(), 3);
    }

    // ---- Test 4: Validation failure writes nothing ----
    #[tokio::test]
    async fn invalid_draft_writes_nothing() {
        let f = fixture();
        let err = f
            .writer
            .submit(&SubmissionDraft::new("", "", "", "code"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
        assert!(f.store.is_empty());
    }

    // ---- Test 5: No signer means no store interaction at all ----
    #[tokio::test]
    async fn submit_requires_identity() {
        let f = fixture();
        f.identity.clear();
        let err = f.writer.submit(&draft("X")).await.unwrap_err();
        assert!(matches!(err, RegistryError::AuthRequired));
        assert!(f.store.is_empty());
    }

    // ---- Test 6: Failed index write leaves a diagnosable orphan ----
    #[tokio::test]
    async fn failed_index_write_orphans_the_record() {
        let f = fixture();
        f.store.fail_writes_to(INDEX_KEY);

        let err = f.writer.submit(&draft("X")).await.unwrap_err();
        let orphan_id = match err {
            RegistryError::IndexWrite { id, .. } => id,
            other => panic!("expected IndexWrite, got: {other}"),
        };

        // Invisible to enumeration...
        assert!(f.reader.load_all().await.is_empty());
        // ...but retrievable by direct key.
        let record = f.reader.load(&orphan_id).await.unwrap();
        assert!(record.is_some());
    }

    // ---- Test 7: A submit writes the record key and the index key only ----
    #[tokio::test]
    async fn submit_touches_exactly_two_keys() {
        let f = fixture();
        let id = f.writer.submit(&draft("X")).await.unwrap();
        let keys = f.store.keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&INDEX_KEY.to_string()));
        assert!(keys.contains(&record_key(&id)));
    }

    // ---- Test 8: Verify and reject both apply from pending ----
    #[tokio::test]
    async fn status_transitions_from_pending() {
        let f = fixture();
        let id_a = f.writer.submit(&draft("A")).await.unwrap();
        let id_b = f.writer.submit(&draft("B")).await.unwrap();

        f.writer
            .set_status(&id_a, ExtensionStatus::Verified)
            .await
            .unwrap();
        f.writer
            .set_status(&id_b, ExtensionStatus::Rejected)
            .await
            .unwrap();

        assert_eq!(
            f.reader.load(&id_a).await.unwrap().unwrap().status,
            ExtensionStatus::Verified
        );
        assert_eq!(
            f.reader.load(&id_b).await.unwrap().unwrap().status,
            ExtensionStatus::Rejected
        );
    }

    // ---- Test 9: Terminal records refuse further transitions, unchanged ----
    #[tokio::test]
    async fn terminal_status_is_immutable() {
        let f = fixture();
        let id = f.writer.submit(&draft("A")).await.unwrap();
        f.writer
            .set_status(&id, ExtensionStatus::Verified)
            .await
            .unwrap();

        let err = f
            .writer
            .set_status(&id, ExtensionStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::IllegalTransition { .. }));

        // No mutation happened.
        assert_eq!(
            f.reader.load(&id).await.unwrap().unwrap().status,
            ExtensionStatus::Verified
        );
    }

    // ---- Test 10: Unknown id is NotFound ----
    #[tokio::test]
    async fn set_status_on_missing_record() {
        let f = fixture();
        let err = f
            .writer
            .set_status(&ExtensionId::new("ghost").unwrap(), ExtensionStatus::Verified)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    // ---- Test 11: Only the developer may transition their record ----
    #[tokio::test]
    async fn set_status_checks_the_developer() {
        let f = fixture();
        let id = f.writer.submit(&draft("A")).await.unwrap();

        f.identity.set_identity(Identity::new("0xBBB"));
        let err = f
            .writer
            .set_status(&id, ExtensionStatus::Verified)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotAuthorized { .. }));

        assert_eq!(
            f.reader.load(&id).await.unwrap().unwrap().status,
            ExtensionStatus::Pending
        );
    }

    // ---- Test 12: Corrupt target record is loud on set_status ----
    #[tokio::test]
    async fn set_status_on_corrupt_record() {
        let f = fixture();
        let id = ExtensionId::new("bad").unwrap();
        f.store
            .set(&record_key(&id), b"{ definitely not json")
            .await
            .unwrap();

        let err = f
            .writer
            .set_status(&id, ExtensionStatus::Verified)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Codec(_)));
    }

    // ---- Test 13: Submit appends to an existing index, never rewrites it ----
    #[tokio::test]
    async fn submit_preserves_existing_index_entries() {
        let f = fixture();
        let a = f.writer.submit(&draft("A")).await.unwrap();
        let b = f.writer.submit(&draft("B")).await.unwrap();

        let index_bytes = f.store.get(INDEX_KEY).await.unwrap();
        let ids = decode_index(&index_bytes).unwrap();
        assert_eq!(ids, vec![a, b]);
    }

    // ---- Test 14: A corrupt stored index is rebuilt, not a submit blocker ----
    #[tokio::test]
    async fn submit_rebuilds_a_malformed_index() {
        let f = fixture();
        f.store.set(INDEX_KEY, b"%%% not json %%%").await.unwrap();

        let id = f.writer.submit(&draft("X")).await.unwrap();

        let index_bytes = f.store.get(INDEX_KEY).await.unwrap();
        let ids = decode_index(&index_bytes).unwrap();
        assert_eq!(ids, vec![id.clone()]);
        assert_eq!(f.reader.load_all().await.len(), 1);
        assert!(f.reader.load(&id).await.unwrap().is_some());
    }

    // ---- Test 15: Failed record write aborts before anything is stored ----
    #[tokio::test]
    async fn failed_record_write_applies_nothing() {
        let f = fixture();
        // The record key is generated inside submit; fault the whole key
        // prefix instead of one key.
        f.store.fail_writes_with_prefix(sealmart_codec::RECORD_KEY_PREFIX);

        let err = f.writer.submit(&draft("X")).await.unwrap_err();
        assert!(matches!(err, RegistryError::RecordWrite(_)));

        // No record, no index entry, no orphan.
        assert!(f.store.is_empty());
        assert!(f.reader.load_all().await.is_empty());
    }
}
