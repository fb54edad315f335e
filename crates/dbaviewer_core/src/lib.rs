//! Core domain logic for the DBA curriculum viewer.
//! Rendering adapters call into this crate; it holds no rendering code.

pub mod config;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod state;
pub mod view;

pub use config::{ConfigError, PreviewLimits, TruncationLimits, ViewerConfig};
pub use export::{export_to_sqlite, render_sql_script, ExportError, ExportRow, ExportSummary};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::catalog::Catalog;
pub use model::standard::{Activity, ActivityRef, DisplayDefaults, Standard, StandardId};
pub use repo::catalog_source::{
    load_catalog, CatalogSource, DataLoadError, JsonFileSource, JsonStrSource, LoadResult,
};
pub use search::filter::{
    apply_filters, apply_filters_to, grade_options, FilterInput, FilteredResult,
};
pub use service::catalog_service::{CatalogService, ServiceError};
pub use service::debounce::Debouncer;
pub use service::navigation::{NavigationOutcome, ReturnNavigator};
pub use state::ui_state::{ModalState, UiState, ViewMode};
pub use view::card::{build_card, ActivityPreview, CardView};
pub use view::modal::{ActivityLink, ActivityModalView, RelatedStandard, StandardModalView};
pub use view::page::{CatalogPage, CatalogStats};
pub use view::text::truncate_text;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
