use thiserror::Error;

use sealmart_codec::CodecError;
use sealmart_store::StoreError;
use sealmart_types::{ExtensionId, ExtensionStatus, Identity, TypeError};

/// Errors surfaced by registry operations.
///
/// Decode failures during enumeration never appear here — `load_all`
/// contains them per item. Everything below is fail-loud: returned to the
/// immediate caller, never a panic.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The store's health probe failed before any read was attempted.
    #[error("backing store is unavailable")]
    StoreUnavailable,

    /// A targeted operation named an id with no stored record.
    #[error("no record stored for id {0}")]
    NotFound(ExtensionId),

    /// The submission draft failed validation; nothing was written.
    #[error("invalid submission: {0}")]
    Validation(#[from] TypeError),

    /// No signing identity is connected; nothing was attempted.
    #[error("no signing identity connected")]
    AuthRequired,

    /// The caller is not the developer of the targeted record.
    #[error("caller {caller} is not the developer of record {id}")]
    NotAuthorized { id: ExtensionId, caller: Identity },

    /// The requested status change is not a legal transition.
    #[error("illegal status transition {from} -> {to} for record {id}")]
    IllegalTransition {
        id: ExtensionId,
        from: ExtensionStatus,
        to: ExtensionStatus,
    },

    /// A read from the store failed at the transport level.
    #[error("store read failed: {0}")]
    StoreRead(#[from] StoreError),

    /// Writing the record value failed. For a submit this happens before
    /// the index is touched, so nothing is half-applied.
    #[error("record write failed: {0}")]
    RecordWrite(#[source] StoreError),

    /// Updating the key index failed after the record write succeeded.
    /// The record identified by `id` is now orphaned: stored, but invisible
    /// to index-based enumeration.
    #[error("index update failed; record {id} is orphaned: {source}")]
    IndexWrite {
        id: ExtensionId,
        #[source]
        source: StoreError,
    },

    /// A targeted record exists but its stored bytes do not decode.
    #[error("stored record is undecodable: {0}")]
    Codec(#[from] CodecError),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
