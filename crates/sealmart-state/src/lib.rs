//! Explicit catalog state for Sealmart front-ends.
//!
//! Instead of ambient component state, the records a reader loaded plus the
//! user's filter, search, and pagination choices live in one passed-around
//! [`Catalog`] value. Every view is a pure function of that value: updating
//! a choice builds a new `Catalog`, and nothing here mutates shared state.

pub mod catalog;

pub use catalog::{Catalog, DEFAULT_PAGE_SIZE};
