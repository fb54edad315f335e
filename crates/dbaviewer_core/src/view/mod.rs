//! View-model builders.
//!
//! # Responsibility
//! - Turn catalog records into display fragments for any rendering adapter.
//! - Own truncation and preview rules so adapters only lay out text.
//!
//! # Invariants
//! - Builders are pure: same inputs, same view-models.
//! - Markup and layout belong to the adapter, not to these types.

pub mod card;
pub mod modal;
pub mod page;
pub mod text;
