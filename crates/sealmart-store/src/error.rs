use thiserror::Error;

/// Errors from key-value store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The transport failed before the store answered (network, RPC).
    #[error("store transport failure: {0}")]
    Transport(String),

    /// The store refused a write (signer rejection, contract revert).
    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
