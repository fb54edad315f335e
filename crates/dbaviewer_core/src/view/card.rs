//! Card view-model for one standard in the result list.

use crate::config::ViewerConfig;
use crate::model::standard::{Standard, StandardId};
use crate::view::text::{join_preview, truncate_text};

/// Preview of one activity shown on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPreview {
    /// Index within the parent standard's activity list.
    pub index: usize,
    pub title: String,
    pub materials_preview: String,
}

/// Display fragments for one standard card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: StandardId,
    pub grade_badge: String,
    pub subject: String,
    pub title: String,
    pub example: Option<String>,
    pub evidence_preview: Vec<String>,
    /// Count behind the "+N more" indicator.
    pub hidden_evidence_count: usize,
    pub activity_preview: Vec<ActivityPreview>,
    pub total_activities: usize,
    /// Whether to offer the "show all activities" affordance.
    pub show_all_activities: bool,
}

/// Builds the card view-model for `standard`.
pub fn build_card(id: StandardId, standard: &Standard, config: &ViewerConfig) -> CardView {
    let labels = &config.labels;
    let limits = config.truncation;
    let preview = config.preview;

    let statement = standard
        .statement
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(labels.card_statement.as_str());

    let evidence_preview = standard
        .evidences
        .iter()
        .take(preview.evidences)
        .map(|evidence| truncate_text(evidence, limits.evidence))
        .collect::<Vec<_>>();
    let hidden_evidence_count = standard.evidences.len() - evidence_preview.len();

    let activity_preview = standard
        .home_activities
        .iter()
        .take(preview.activities)
        .enumerate()
        .map(|(index, activity)| ActivityPreview {
            index,
            title: activity.title_or(labels).to_string(),
            materials_preview: join_preview(&activity.materials, preview.materials),
        })
        .collect::<Vec<_>>();
    let total_activities = standard.home_activities.len();

    CardView {
        id,
        grade_badge: standard.level_or(labels).to_string(),
        subject: standard.area_or(labels).to_string(),
        title: truncate_text(statement, limits.statement),
        example: standard
            .example_text()
            .map(|example| truncate_text(example, limits.example)),
        evidence_preview,
        hidden_evidence_count,
        show_all_activities: activity_preview.len() < total_activities,
        activity_preview,
        total_activities,
    }
}
