//! Ordered Overlapping Hierarchies
//!
//! A [`Hierarchy`] is a directed acyclic graph with a single root (the
//! *hierarch*) in which members may have several parents and every member's
//! children are kept in an explicit order. The graph is always kept in
//! transitively reduced form: an edge is only stored when no longer path
//! already connects its endpoints.

pub mod domain;
pub use domain::{Hierarchy, Link, LinkOutcome, RelateError, Relationship};
