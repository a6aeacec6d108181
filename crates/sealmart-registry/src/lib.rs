//! Registry synchronization core for the Sealmart marketplace client.
//!
//! The remote contract is, to this crate, a key-value store with one index
//! value and one value per record. Two collaborators drive it:
//!
//! - [`RegistryReader`] enumerates the catalog: fetch the key index, fetch
//!   and decode each record independently, return newest-first. Reads are
//!   fail-soft — a malformed index or record is logged and skipped, never
//!   fatal to the whole load.
//! - [`RegistryWriter`] appends new records ([`submit`](RegistryWriter::submit))
//!   and applies review verdicts ([`set_status`](RegistryWriter::set_status)).
//!   Writes are fail-loud, and the error distinguishes which of the two
//!   dependent writes failed.
//!
//! # Consistency
//!
//! The store offers no multi-key transaction, so a submit is two separate
//! writes: the record, then the refreshed index. If the second fails the
//! record exists but is invisible to enumeration — an orphaned record,
//! surfaced as [`RegistryError::IndexWrite`] rather than repaired. Two
//! concurrent submits can also race on the index read-modify-write; the
//! later index write wins and can drop the earlier id. Both windows are
//! accepted: consistency here is best effort, read-latest-then-write.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{RegistryError, RegistryResult};
pub use reader::RegistryReader;
pub use writer::RegistryWriter;
