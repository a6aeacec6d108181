//! Key-value store access for the Sealmart registry.
//!
//! The backing store (an on-chain contract in production) is reduced to the
//! narrow capability interface the registry actually needs: [`KeyValueStore`]
//! with `get`, `set`, and an `is_available` health check. The interface is
//! polymorphic over transport; [`InMemoryKeyValueStore`] is the
//! `HashMap`-backed implementation used by tests and the demo binary.
//!
//! # Design Rules
//!
//! 1. An absent key reads as zero-length bytes, never as an error.
//! 2. Each call touches exactly one key; the store offers no multi-key
//!    transaction, so callers own any cross-key consistency.
//! 3. Transport and write failures are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryKeyValueStore;
pub use traits::KeyValueStore;
