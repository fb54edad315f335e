//! Filter and search entry points.
//!
//! # Responsibility
//! - Expose catalog filtering over the in-memory collection.
//! - Keep predicate semantics inside core.

pub mod filter;
