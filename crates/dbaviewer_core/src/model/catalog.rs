//! Immutable catalog of loaded standards.
//!
//! # Invariants
//! - `StandardId(n)` addresses the n-th loaded record for the whole session.
//! - Search haystacks are computed once at construction.

use crate::model::standard::{Activity, ActivityRef, Standard, StandardId};

#[derive(Debug, Clone)]
struct CatalogEntry {
    standard: Standard,
    haystack: String,
}

/// Read-only reference data for one viewer session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, assigning surrogate ids in collection order.
    pub fn from_standards(standards: Vec<Standard>) -> Self {
        let entries = standards
            .into_iter()
            .map(|standard| CatalogEntry {
                haystack: standard.search_haystack(),
                standard,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: StandardId) -> Option<&Standard> {
        self.entries.get(id.index()).map(|entry| &entry.standard)
    }

    /// Returns a checked activity reference, or `None` when either the
    /// standard or the activity index does not exist.
    pub fn activity_ref(&self, id: StandardId, index: usize) -> Option<ActivityRef> {
        let standard = self.get(id)?;
        (index < standard.home_activities.len()).then(|| ActivityRef::new(id, index))
    }

    /// Resolves a checked reference to its parent standard and activity.
    pub fn activity(&self, activity: ActivityRef) -> Option<(&Standard, &Activity)> {
        let standard = self.get(activity.standard())?;
        let item = standard.home_activities.get(activity.index())?;
        Some((standard, item))
    }

    /// Iterates `(id, standard)` pairs in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (StandardId, &Standard)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (StandardId(position as u32), &entry.standard))
    }

    pub fn ids(&self) -> Vec<StandardId> {
        (0..self.entries.len())
            .map(|position| StandardId(position as u32))
            .collect()
    }

    pub(crate) fn haystack(&self, id: StandardId) -> Option<&str> {
        self.entries
            .get(id.index())
            .map(|entry| entry.haystack.as_str())
    }
}
