//! Standard and activity records.
//!
//! # Responsibility
//! - Decode curriculum records from the dataset wire format.
//! - Resolve display defaults for absent optional fields.
//!
//! # Invariants
//! - Absent fields and JSON `null` decode to empty defaults, never errors.
//! - Records are read-only once decoded.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Surrogate identity assigned once at load time.
///
/// Equal to the record position in the loaded collection; filtering never
/// renumbers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StandardId(pub u32);

impl StandardId {
    /// Position of this record in the full collection.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for StandardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checked reference to one activity of one standard.
///
/// Only [`crate::Catalog::activity_ref`] constructs this, so holding one
/// proves the activity exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityRef {
    standard: StandardId,
    index: usize,
}

impl ActivityRef {
    pub(crate) fn new(standard: StandardId, index: usize) -> Self {
        Self { standard, index }
    }

    pub fn standard(self) -> StandardId {
        self.standard
    }

    pub fn index(self) -> usize {
        self.index
    }
}

/// One curriculum requirement record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standard {
    /// Grade label such as `3°`.
    #[serde(rename = "nivel", default)]
    pub level: Option<String>,
    /// Subject tag.
    #[serde(default)]
    pub area: Option<String>,
    #[serde(rename = "enunciado", default)]
    pub statement: Option<String>,
    #[serde(rename = "ejemplo", default)]
    pub example: Option<String>,
    /// Learning evidence items, in authored order.
    #[serde(
        rename = "evidencias_de_aprendizaje",
        default,
        deserialize_with = "nullable_vec"
    )]
    pub evidences: Vec<String>,
    #[serde(
        rename = "actividades_en_casa",
        default,
        deserialize_with = "nullable_vec"
    )]
    pub home_activities: Vec<Activity>,
}

impl Standard {
    /// Returns the example only when it carries text.
    pub fn example_text(&self) -> Option<&str> {
        self.example.as_deref().filter(|value| !value.is_empty())
    }

    pub fn has_activities(&self) -> bool {
        !self.home_activities.is_empty()
    }

    /// Resolves `area`, falling back to `defaults.area`.
    pub fn area_or<'a>(&'a self, defaults: &'a DisplayDefaults) -> &'a str {
        non_empty(self.area.as_deref()).unwrap_or(defaults.area.as_str())
    }

    /// Resolves `level`, falling back to `defaults.level`.
    pub fn level_or<'a>(&'a self, defaults: &'a DisplayDefaults) -> &'a str {
        non_empty(self.level.as_deref()).unwrap_or(defaults.level.as_str())
    }

    /// Builds the case-folded search haystack.
    ///
    /// Statement, example, evidences and every activity's title, materials
    /// and steps are joined with single spaces, absent values as `""`.
    pub fn search_haystack(&self) -> String {
        let mut fields: Vec<&str> = Vec::with_capacity(2 + self.evidences.len());
        fields.push(self.statement.as_deref().unwrap_or(""));
        fields.push(self.example.as_deref().unwrap_or(""));
        fields.extend(self.evidences.iter().map(String::as_str));
        for activity in &self.home_activities {
            fields.push(activity.title.as_deref().unwrap_or(""));
            fields.extend(activity.materials.iter().map(String::as_str));
            fields.extend(activity.steps.iter().map(String::as_str));
        }
        fields.join(" ").to_lowercase()
    }
}

/// Home-practice task nested under a standard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "materiales", default, deserialize_with = "nullable_vec")]
    pub materials: Vec<String>,
    /// Ordered step-by-step instructions.
    #[serde(rename = "paso_a_paso", default, deserialize_with = "nullable_vec")]
    pub steps: Vec<String>,
}

impl Activity {
    pub fn title_or<'a>(&'a self, defaults: &'a DisplayDefaults) -> &'a str {
        non_empty(self.title.as_deref()).unwrap_or(defaults.activity_title.as_str())
    }
}

/// Placeholder labels for absent optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDefaults {
    pub area: String,
    pub level: String,
    /// Used on cards when the statement is absent.
    pub card_statement: String,
    /// Used in modals when the statement is absent.
    pub modal_statement: String,
    pub activity_title: String,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            area: "Matemáticas".to_string(),
            level: "N/A".to_string(),
            card_statement: "Sin enunciado".to_string(),
            modal_statement: "No disponible".to_string(),
            activity_title: "Actividad sin título".to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
