//! Wire format for the Sealmart registry.
//!
//! Everything stored in the backing key-value store is UTF-8 encoded JSON:
//!
//! - The key index at [`INDEX_KEY`] is a JSON array of id strings.
//! - Each record at [`record_key`]`(id)` is a JSON object; the id itself is
//!   the key and is not repeated in the body.
//!
//! Decoding is forward-compatible: unknown fields are ignored, and absent
//! `status`/`downloads`/`rating`/`description` fall back to documented
//! defaults. Encoding always writes every field.
//!
//! The [`CodeSealer`] trait is the seam for the sealing collaborator; the
//! registry core only requires that sealing is deterministic and produces an
//! opaque string.

pub mod error;
pub mod keys;
pub mod sealer;
pub mod wire;

pub use error::{CodecError, CodecResult};
pub use keys::{record_key, INDEX_KEY, RECORD_KEY_PREFIX};
pub use sealer::{CodeSealer, HexSealer};
pub use wire::{decode_index, decode_record, encode_index, encode_record};
