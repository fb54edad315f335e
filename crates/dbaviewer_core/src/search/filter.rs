//! In-memory filter engine over the catalog.
//!
//! # Responsibility
//! - Apply grade, activities-only and substring search predicates.
//! - Return stable ids, never copies of records.
//!
//! # Invariants
//! - Output preserves the relative order of the input ids.
//! - Empty/absent filter values always pass.
//! - Re-applying the same input to a result yields the same result.

use crate::model::catalog::Catalog;
use crate::model::standard::StandardId;
use std::collections::BTreeSet;

/// Filter inputs collected from the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    /// Raw search text; trimmed and case-folded before matching.
    pub search: String,
    /// Selected grade; `None` or `""` means all grades.
    pub grade: Option<String>,
    pub activities_only: bool,
}

impl FilterInput {
    /// Normalized search term, or `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        let term = self.search.trim().to_lowercase();
        (!term.is_empty()).then_some(term)
    }

    /// Selected grade, or `None` when blank.
    pub fn selected_grade(&self) -> Option<&str> {
        self.grade.as_deref().filter(|grade| !grade.is_empty())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_term().is_none() && self.selected_grade().is_none() && !self.activities_only
    }
}

/// Ordered ids that passed every active predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredResult {
    pub ids: Vec<StandardId>,
}

impl FilteredResult {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: StandardId) -> bool {
        self.ids.contains(&id)
    }
}

/// Filters the full catalog.
pub fn apply_filters(catalog: &Catalog, input: &FilterInput) -> FilteredResult {
    apply_filters_to(catalog, &catalog.ids(), input)
}

/// Filters an existing subset of catalog ids.
///
/// Ids unknown to `catalog` are dropped.
pub fn apply_filters_to(
    catalog: &Catalog,
    base: &[StandardId],
    input: &FilterInput,
) -> FilteredResult {
    let term = input.search_term();
    let grade = input.selected_grade();

    let ids = base
        .iter()
        .copied()
        .filter(|id| passes(catalog, *id, grade, input.activities_only, term.as_deref()))
        .collect();
    FilteredResult { ids }
}

fn passes(
    catalog: &Catalog,
    id: StandardId,
    grade: Option<&str>,
    activities_only: bool,
    term: Option<&str>,
) -> bool {
    let Some(standard) = catalog.get(id) else {
        return false;
    };

    if let Some(grade) = grade {
        if standard.level.as_deref() != Some(grade) {
            return false;
        }
    }

    if activities_only && !standard.has_activities() {
        return false;
    }

    match term {
        Some(term) => catalog
            .haystack(id)
            .is_some_and(|haystack| haystack.contains(term)),
        None => true,
    }
}

/// Distinct grade labels, sorted ascending, for the grade selector.
pub fn grade_options(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .filter_map(|(_, standard)| standard.level.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
