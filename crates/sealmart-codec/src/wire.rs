use serde::{Deserialize, Serialize};

use sealmart_types::{ExtensionId, ExtensionRecord, ExtensionStatus, Identity};

use crate::error::CodecResult;

/// The serialized shape of a record body.
///
/// Field names are the wire contract and use camelCase. The record id is
/// the store key, never part of the body. `deny_unknown_fields` is
/// deliberately NOT set: unknown fields from newer writers are ignored.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    name: String,
    #[serde(default)]
    description: String,
    category: String,
    developer: String,
    encrypted_code: String,
    timestamp: u64,
    #[serde(default)]
    status: ExtensionStatus,
    #[serde(default)]
    downloads: u64,
    #[serde(default)]
    rating: f64,
}

/// Decode a key index value into its list of ids.
///
/// A zero-length value means the index has never been written; that is an
/// empty index, not an error.
pub fn decode_index(bytes: &[u8]) -> CodecResult<Vec<ExtensionId>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let text = std::str::from_utf8(bytes)?;
    let ids: Vec<String> = serde_json::from_str(text)?;
    Ok(ids.into_iter().map(ExtensionId::from_wire).collect())
}

/// Encode a key index to its stored form (UTF-8 JSON array of strings).
pub fn encode_index(ids: &[ExtensionId]) -> CodecResult<Vec<u8>> {
    Ok(serde_json::to_vec(ids)?)
}

/// Decode a record body stored under `key(id)` into an [`ExtensionRecord`].
///
/// Absent `status` defaults to pending; absent `downloads`, `rating`, and
/// `description` default to `0`, `0`, and `""`.
pub fn decode_record(id: ExtensionId, bytes: &[u8]) -> CodecResult<ExtensionRecord> {
    let text = std::str::from_utf8(bytes)?;
    let wire: WireRecord = serde_json::from_str(text)?;
    Ok(ExtensionRecord {
        id,
        name: wire.name,
        description: wire.description,
        category: wire.category,
        developer: Identity::new(wire.developer),
        encrypted_code: wire.encrypted_code,
        timestamp: wire.timestamp,
        status: wire.status,
        downloads: wire.downloads,
        rating: wire.rating,
    })
}

/// Encode a record body to its stored form (UTF-8 JSON object).
///
/// Every field is written explicitly, including ones that currently hold
/// their decode-side defaults.
pub fn encode_record(record: &ExtensionRecord) -> CodecResult<Vec<u8>> {
    let wire = WireRecord {
        name: record.name.clone(),
        description: record.description.clone(),
        category: record.category.clone(),
        developer: record.developer.as_str().to_string(),
        encrypted_code: record.encrypted_code.clone(),
        timestamp: record.timestamp,
        status: record.status,
        downloads: record.downloads,
        rating: record.rating,
    };
    Ok(serde_json::to_vec(&wire)?)
}
