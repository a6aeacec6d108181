use thiserror::Error;

/// Errors from encoding or decoding stored values.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The stored bytes are not valid UTF-8.
    #[error("value is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The stored text is not the expected JSON shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A sealed blob could not be unsealed.
    #[error("sealed code is not valid hex: {0}")]
    SealedNotHex(#[from] hex::FromHexError),

    /// Unsealed bytes did not decode back to text.
    #[error("unsealed bytes are not valid UTF-8")]
    SealedNotUtf8,
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
