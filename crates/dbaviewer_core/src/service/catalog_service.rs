//! Catalog viewer use-case service.
//!
//! # Responsibility
//! - Own the session state: catalog, filter input, filtered result, UI flags.
//! - Expose UI-event level operations to rendering adapters.
//!
//! # Invariants
//! - The catalog is never mutated; the filtered result is replaced wholesale.
//! - Search input is debounced; grade and toggle changes filter immediately.
//! - Only one modal is open at a time.

use crate::config::ViewerConfig;
use crate::model::catalog::Catalog;
use crate::model::standard::StandardId;
use crate::search::filter::{apply_filters, grade_options, FilterInput, FilteredResult};
use crate::service::debounce::Debouncer;
use crate::service::navigation::{NavigationOutcome, ReturnNavigator};
use crate::state::ui_state::{ModalState, UiState, ViewMode};
use crate::view::modal::{
    build_activity_modal, build_standard_modal, ActivityModalView, StandardModalView,
};
use crate::view::page::{build_page, CatalogPage, CatalogStats};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for modal navigation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    UnknownStandard(StandardId),
    UnknownActivity { standard: StandardId, index: usize },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStandard(id) => write!(f, "standard not found: {id}"),
            Self::UnknownActivity { standard, index } => {
                write!(f, "activity {index} not found for standard {standard}")
            }
        }
    }
}

impl Error for ServiceError {}

/// Controller for one viewer session.
pub struct CatalogService {
    catalog: Catalog,
    config: ViewerConfig,
    input: FilterInput,
    filtered: FilteredResult,
    ui: UiState,
    search_debounce: Debouncer<String>,
    navigator: Option<Box<dyn ReturnNavigator>>,
}

impl CatalogService {
    /// Creates a service showing the unfiltered catalog.
    pub fn new(catalog: Catalog, config: ViewerConfig) -> Self {
        let input = FilterInput::default();
        let filtered = apply_filters(&catalog, &input);
        let search_debounce = Debouncer::new(config.search_debounce);
        Self {
            catalog,
            config,
            input,
            filtered,
            ui: UiState::default(),
            search_debounce,
            navigator: None,
        }
    }

    /// Injects the hook used by [`Self::back_to_previous_view`].
    pub fn with_navigator(mut self, navigator: impl ReturnNavigator + 'static) -> Self {
        self.navigator = Some(Box::new(navigator));
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn filter_input(&self) -> &FilterInput {
        &self.input
    }

    pub fn filtered(&self) -> &FilteredResult {
        &self.filtered
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn grade_options(&self) -> Vec<String> {
        grade_options(&self.catalog)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total: self.catalog.len(),
            filtered: self.filtered.len(),
        }
    }

    /// Recomputes the filtered result from the current input.
    pub fn apply_filters(&mut self) -> &FilteredResult {
        let started_at = Instant::now();
        self.filtered = apply_filters(&self.catalog, &self.input);
        debug!(
            "event=filter_apply module=service status=ok total={} filtered={} grade={} activities_only={} duration_us={}",
            self.catalog.len(),
            self.filtered.len(),
            self.input.selected_grade().unwrap_or("*"),
            self.input.activities_only,
            started_at.elapsed().as_micros()
        );
        &self.filtered
    }

    /// Queues search text; any previously queued text is discarded.
    pub fn on_search_input(&mut self, text: impl Into<String>, now: Instant) {
        self.search_debounce.push(text.into(), now);
    }

    /// Runs the queued search once the debounce window has elapsed.
    ///
    /// Returns `true` when a filter run happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.search_debounce.poll(now) {
            Some(text) => {
                self.run_search(text);
                true
            }
            None => false,
        }
    }

    /// Runs the queued search immediately.
    pub fn flush_search(&mut self) -> bool {
        match self.search_debounce.flush() {
            Some(text) => {
                self.run_search(text);
                true
            }
            None => false,
        }
    }

    pub fn search_pending(&self) -> bool {
        self.search_debounce.is_pending()
    }

    /// Sets the search text and filters without debouncing.
    pub fn set_search(&mut self, text: impl Into<String>) -> &FilteredResult {
        self.search_debounce.cancel();
        self.input.search = text.into();
        self.apply_filters()
    }

    /// Selects a grade (`None` for all grades) and filters.
    pub fn set_grade(&mut self, grade: Option<String>) -> &FilteredResult {
        self.input.grade = grade;
        self.apply_filters()
    }

    /// Flips activities-only and filters; returns the new flag value.
    pub fn toggle_activities_only(&mut self) -> bool {
        let enabled = self.ui.toggle_activities_only();
        self.input.activities_only = enabled;
        self.apply_filters();
        info!("event=activities_toggle module=service status=ok enabled={enabled}");
        enabled
    }

    /// Changes the layout only; the filtered result is untouched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.ui.view_mode = mode;
    }

    pub fn page(&self) -> CatalogPage {
        build_page(&self.catalog, &self.filtered, self.ui.view_mode, &self.config)
    }

    pub fn open_standard(&mut self, id: StandardId) -> Result<StandardModalView, ServiceError> {
        let view = build_standard_modal(&self.catalog, id, &self.config)
            .ok_or(ServiceError::UnknownStandard(id))?;
        self.ui.open_standard(id);
        Ok(view)
    }

    /// Opens the activity modal, replacing any open standard modal.
    pub fn open_activity(
        &mut self,
        standard: StandardId,
        index: usize,
    ) -> Result<ActivityModalView, ServiceError> {
        let target = self
            .catalog
            .activity_ref(standard, index)
            .ok_or(ServiceError::UnknownActivity { standard, index })?;
        let view = build_activity_modal(&self.catalog, target, &self.config)
            .ok_or(ServiceError::UnknownActivity { standard, index })?;
        self.ui.open_activity(target);
        Ok(view)
    }

    /// View-model of the open standard modal, if any.
    pub fn standard_modal(&self) -> Option<StandardModalView> {
        match self.ui.modal() {
            ModalState::Standard(id) => build_standard_modal(&self.catalog, id, &self.config),
            _ => None,
        }
    }

    /// View-model of the open activity modal, if any.
    pub fn activity_modal(&self) -> Option<ActivityModalView> {
        match self.ui.modal() {
            ModalState::Activity(target) => {
                build_activity_modal(&self.catalog, target, &self.config)
            }
            _ => None,
        }
    }

    pub fn close_standard_modal(&mut self) {
        self.ui.close_standard_modal();
    }

    pub fn close_activity_modal(&mut self) {
        self.ui.close_activity_modal();
    }

    /// Escape key: closes any open modal.
    pub fn close_modals(&mut self) {
        self.ui.close_all();
    }

    /// Returns to the host's previous view.
    ///
    /// Without an injected navigator this closes open modals and reports
    /// [`NavigationOutcome::Fallback`].
    pub fn back_to_previous_view(&mut self) -> NavigationOutcome {
        match self.navigator.as_mut() {
            Some(navigator) => {
                navigator.show_previous_view();
                info!("event=navigate_back module=service status=ok mode=delegated");
                NavigationOutcome::Delegated
            }
            None => {
                self.ui.close_all();
                warn!("event=navigate_back module=service status=fallback reason=no_navigator");
                NavigationOutcome::Fallback
            }
        }
    }

    fn run_search(&mut self, text: String) {
        self.input.search = text;
        self.apply_filters();
    }
}
