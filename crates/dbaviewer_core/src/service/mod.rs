//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate filtering, view building and UI state into UI-event APIs.
//! - Keep rendering adapters decoupled from catalog internals.

pub mod catalog_service;
pub mod debounce;
pub mod navigation;
