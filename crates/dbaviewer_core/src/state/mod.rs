//! Session UI state independent of any rendering target.

pub mod ui_state;
