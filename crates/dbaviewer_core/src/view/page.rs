//! Result page view-model: cards plus counters.

use crate::config::ViewerConfig;
use crate::model::catalog::Catalog;
use crate::search::filter::FilteredResult;
use crate::state::ui_state::ViewMode;
use crate::view::card::{build_card, CardView};

/// Total vs. shown counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub filtered: usize,
}

impl CatalogStats {
    /// Whether the "N shown" badge should be displayed.
    pub fn filtered_differs(&self) -> bool {
        self.filtered != self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    /// Layout the adapter should wrap the cards in.
    pub view_mode: ViewMode,
    pub cards: Vec<CardView>,
    pub stats: CatalogStats,
}

impl CatalogPage {
    /// True when the "no results" panel replaces the card container.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Builds the page for the current filtered result.
pub fn build_page(
    catalog: &Catalog,
    filtered: &FilteredResult,
    view_mode: ViewMode,
    config: &ViewerConfig,
) -> CatalogPage {
    let cards = filtered
        .ids
        .iter()
        .filter_map(|id| catalog.get(*id).map(|standard| build_card(*id, standard, config)))
        .collect::<Vec<_>>();

    CatalogPage {
        view_mode,
        stats: CatalogStats {
            total: catalog.len(),
            filtered: filtered.len(),
        },
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogStats;

    #[test]
    fn filtered_badge_only_when_counts_differ() {
        assert!(!CatalogStats { total: 4, filtered: 4 }.filtered_differs());
        assert!(CatalogStats { total: 4, filtered: 1 }.filtered_differs());
    }
}
