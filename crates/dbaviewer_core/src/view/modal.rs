//! Detail view-models for the standard and activity modals.
//!
//! Modal views are never truncated.

use crate::config::ViewerConfig;
use crate::model::catalog::Catalog;
use crate::model::standard::{ActivityRef, Standard, StandardId};

/// One activity row in the standard modal; selecting it opens the activity
/// modal through `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLink {
    pub target: ActivityRef,
    pub title: String,
    pub materials: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardModalView {
    pub id: StandardId,
    /// `"{area} - {level}"`.
    pub title: String,
    pub statement: String,
    pub example: Option<String>,
    pub evidences: Vec<String>,
    pub activities: Vec<ActivityLink>,
}

/// Back-reference to the parent standard shown in the activity modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedStandard {
    pub area: String,
    pub level: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityModalView {
    pub target: ActivityRef,
    pub title: String,
    pub materials: Vec<String>,
    pub steps: Vec<String>,
    pub step_count: usize,
    pub related: RelatedStandard,
}

/// Builds the standard modal, or `None` when `id` is unknown.
pub fn build_standard_modal(
    catalog: &Catalog,
    id: StandardId,
    config: &ViewerConfig,
) -> Option<StandardModalView> {
    let standard = catalog.get(id)?;
    let labels = &config.labels;

    let activities = (0..standard.home_activities.len())
        .filter_map(|index| catalog.activity_ref(id, index))
        .filter_map(|target| {
            let (_, activity) = catalog.activity(target)?;
            Some(ActivityLink {
                target,
                title: activity.title_or(labels).to_string(),
                materials: activity.materials.join(", "),
            })
        })
        .collect();

    Some(StandardModalView {
        id,
        title: heading(standard, config),
        statement: modal_statement(standard, config),
        example: standard.example_text().map(str::to_string),
        evidences: standard.evidences.clone(),
        activities,
    })
}

/// Builds the activity modal for a checked activity reference.
pub fn build_activity_modal(
    catalog: &Catalog,
    target: ActivityRef,
    config: &ViewerConfig,
) -> Option<ActivityModalView> {
    let (standard, activity) = catalog.activity(target)?;
    let labels = &config.labels;

    Some(ActivityModalView {
        target,
        title: activity.title_or(labels).to_string(),
        materials: activity.materials.clone(),
        steps: activity.steps.clone(),
        step_count: activity.steps.len(),
        related: RelatedStandard {
            area: standard.area_or(labels).to_string(),
            level: standard.level_or(labels).to_string(),
            statement: modal_statement(standard, config),
        },
    })
}

fn heading(standard: &Standard, config: &ViewerConfig) -> String {
    format!(
        "{} - {}",
        standard.area_or(&config.labels),
        standard.level_or(&config.labels)
    )
}

fn modal_statement(standard: &Standard, config: &ViewerConfig) -> String {
    standard
        .statement
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(config.labels.modal_statement.as_str())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{build_activity_modal, build_standard_modal};
    use crate::config::ViewerConfig;
    use crate::model::catalog::Catalog;
    use crate::model::standard::{Activity, Standard, StandardId};

    fn catalog() -> Catalog {
        let long = "z".repeat(400);
        Catalog::from_standards(vec![Standard {
            level: Some("5°".to_string()),
            area: Some("Geometría".to_string()),
            statement: Some(long),
            example: Some(String::new()),
            evidences: vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()],
            home_activities: vec![Activity {
                title: Some("Medir la mesa".to_string()),
                materials: vec!["cinta".to_string(), "lápiz".to_string()],
                steps: vec!["Medir".to_string(), "Anotar".to_string()],
            }],
        }])
    }

    #[test]
    fn standard_modal_is_untruncated() {
        let catalog = catalog();
        let view = build_standard_modal(&catalog, StandardId(0), &ViewerConfig::default())
            .expect("standard exists");
        assert_eq!(view.title, "Geometría - 5°");
        assert_eq!(view.statement.chars().count(), 400);
        assert_eq!(view.example, None);
        assert_eq!(view.evidences.len(), 4);
        assert_eq!(view.activities[0].materials, "cinta, lápiz");
        assert_eq!(view.activities[0].target.index(), 0);
    }

    #[test]
    fn activity_modal_carries_steps_and_parent_summary() {
        let catalog = catalog();
        let target = catalog
            .activity_ref(StandardId(0), 0)
            .expect("activity exists");
        let view = build_activity_modal(&catalog, target, &ViewerConfig::default())
            .expect("activity modal builds");
        assert_eq!(view.title, "Medir la mesa");
        assert_eq!(view.steps, vec!["Medir".to_string(), "Anotar".to_string()]);
        assert_eq!(view.step_count, 2);
        assert_eq!(view.related.area, "Geometría");
        assert_eq!(view.related.level, "5°");
    }

    #[test]
    fn unknown_standard_has_no_modal() {
        assert!(
            build_standard_modal(&catalog(), StandardId(3), &ViewerConfig::default()).is_none()
        );
    }
}
