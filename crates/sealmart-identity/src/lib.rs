//! Signing identity access for the Sealmart registry.
//!
//! A wallet connection is reduced to the capability the registry needs:
//! who is the current signer, and tell me when that changes. The
//! [`SigningIdentityProvider`] trait is polymorphic over the concrete
//! wallet transport; [`StaticIdentityProvider`] is the channel-backed
//! implementation used by tests and the demo binary.

pub mod provider;

pub use provider::{SigningIdentityProvider, StaticIdentityProvider};
