//! Foundation types for the Sealmart extension marketplace client.
//!
//! This crate provides the core identity and record types used throughout
//! the Sealmart system. Every other Sealmart crate depends on
//! `sealmart-types`.
//!
//! # Key Types
//!
//! - [`ExtensionId`] — Opaque record key, generated as a UUID v7
//! - [`ExtensionStatus`] — Review status with a one-way transition rule
//! - [`ExtensionRecord`] — One submitted extension as held in memory
//! - [`SubmissionDraft`] — Caller-supplied fields for a new submission
//! - [`Identity`] — Address-like signing identity string

pub mod draft;
pub mod error;
pub mod id;
pub mod identity;
pub mod record;
pub mod status;

pub use draft::SubmissionDraft;
pub use error::TypeError;
pub use id::ExtensionId;
pub use identity::Identity;
pub use record::{now_seconds, ExtensionRecord};
pub use status::ExtensionStatus;
