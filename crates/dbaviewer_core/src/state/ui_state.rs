//! UI state tracker.
//!
//! # Responsibility
//! - Track view mode, the activities-only toggle and modal visibility.
//!
//! # Invariants
//! - At most one modal is open; opening one replaces the other.
//! - An open activity modal always refers to an existing activity.

use crate::model::standard::{ActivityRef, StandardId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Result layout selector; affects presentation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewMode(pub String);

impl Display for UnknownViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown view mode `{}`; expected cards|list", self.0)
    }
}

impl Error for UnknownViewMode {}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cards" => Ok(Self::Cards),
            "list" => Ok(Self::List),
            other => Err(UnknownViewMode(other.to_string())),
        }
    }
}

/// Which modal, if any, is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Standard(StandardId),
    Activity(ActivityRef),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub view_mode: ViewMode,
    activities_only: bool,
    modal: ModalState,
}

impl UiState {
    pub fn activities_only(&self) -> bool {
        self.activities_only
    }

    /// Flips the activities-only flag and returns the new value.
    pub fn toggle_activities_only(&mut self) -> bool {
        self.activities_only = !self.activities_only;
        self.activities_only
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn open_standard(&mut self, id: StandardId) {
        self.modal = ModalState::Standard(id);
    }

    pub fn open_activity(&mut self, target: ActivityRef) {
        self.modal = ModalState::Activity(target);
    }

    /// Closes the standard modal; no-op when it is not the open one.
    pub fn close_standard_modal(&mut self) {
        if matches!(self.modal, ModalState::Standard(_)) {
            self.modal = ModalState::Closed;
        }
    }

    /// Closes the activity modal; no-op when it is not the open one.
    pub fn close_activity_modal(&mut self) {
        if matches!(self.modal, ModalState::Activity(_)) {
            self.modal = ModalState::Closed;
        }
    }

    /// Escape: closes whichever modal is open.
    pub fn close_all(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn standard_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Standard(_))
    }

    pub fn activity_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Activity(_))
    }

    /// Activity index shown in the activity modal, only while it is open.
    pub fn current_activity_index(&self) -> Option<usize> {
        match self.modal {
            ModalState::Activity(target) => Some(target.index()),
            _ => None,
        }
    }

    /// Page scrolling is locked while any modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.modal != ModalState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::{ModalState, UiState, ViewMode};
    use crate::model::standard::{ActivityRef, StandardId};

    #[test]
    fn view_mode_parses_case_insensitively() {
        assert_eq!(" LIST ".parse::<ViewMode>(), Ok(ViewMode::List));
        assert_eq!("cards".parse::<ViewMode>(), Ok(ViewMode::Cards));
        assert!("grid".parse::<ViewMode>().is_err());
    }

    #[test]
    fn toggle_activities_only_round_trips() {
        let mut state = UiState::default();
        assert!(state.toggle_activities_only());
        assert!(!state.toggle_activities_only());
    }

    #[test]
    fn opening_activity_replaces_standard_modal() {
        let mut state = UiState::default();
        state.open_standard(StandardId(1));
        assert!(state.standard_modal_open());
        assert!(state.scroll_locked());

        state.open_activity(ActivityRef::new(StandardId(1), 2));
        assert!(!state.standard_modal_open());
        assert!(state.activity_modal_open());
        assert_eq!(state.current_activity_index(), Some(2));
    }

    #[test]
    fn closing_other_modal_is_noop() {
        let mut state = UiState::default();
        state.open_standard(StandardId(0));
        state.close_activity_modal();
        assert_eq!(state.modal(), ModalState::Standard(StandardId(0)));

        state.close_standard_modal();
        assert_eq!(state.modal(), ModalState::Closed);
        assert!(!state.scroll_locked());
        assert_eq!(state.current_activity_index(), None);
    }
}
