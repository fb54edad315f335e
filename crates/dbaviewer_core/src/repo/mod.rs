//! Dataset loading layer.
//!
//! # Responsibility
//! - Define the source contract used to obtain the standards collection.
//! - Keep file and JSON decoding details out of the service layer.

pub mod catalog_source;
