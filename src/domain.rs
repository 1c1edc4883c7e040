//! Domain models for ordered overlapping hierarchies.
//!
//! This module contains the hierarchy container itself, the edge types it
//! reports, and the transitive reduction pass it runs after every insertion.

/// The hierarchy container and its queries.
pub mod hierarchy;
pub use hierarchy::Hierarchy;

mod display;

mod error;
pub use error::RelateError;

mod reduce;

/// Parent-child edge types.
pub mod relationship;
pub use relationship::{Link, LinkOutcome, Relationship};
