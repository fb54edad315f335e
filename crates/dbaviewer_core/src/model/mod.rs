//! Domain model for the curriculum catalog.
//!
//! # Responsibility
//! - Define the standard/activity records decoded from the dataset.
//! - Hold the immutable, id-addressed catalog built once per session.
//!
//! # Invariants
//! - Every standard is identified by a `StandardId` assigned at load time.
//! - The catalog is never mutated after construction.

pub mod catalog;
pub mod standard;
