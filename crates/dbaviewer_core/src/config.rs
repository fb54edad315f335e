//! Viewer configuration.
//!
//! # Responsibility
//! - Hold dataset location, debounce window and display limits.
//! - Apply environment overrides on top of defaults.
//!
//! # Invariants
//! - `search_debounce` is never zero after validation.

use crate::model::standard::DisplayDefaults;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

/// Env var overriding the dataset path.
pub const DATA_PATH_ENV: &str = "DBAVIEWER_DATA_PATH";
/// Env var overriding the search debounce window in milliseconds.
pub const DEBOUNCE_MS_ENV: &str = "DBAVIEWER_DEBOUNCE_MS";

const DEFAULT_DATA_FILE_NAME: &str = "logica_dba_actividades.json";
const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDebounce(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDebounce(value) => write!(
                f,
                "invalid debounce `{value}`; expected a positive number of milliseconds"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Max character counts used by card truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationLimits {
    pub statement: usize,
    pub example: usize,
    pub evidence: usize,
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self {
            statement: 120,
            example: 150,
            evidence: 80,
        }
    }
}

/// Item counts shown on a card before the "more" affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    pub evidences: usize,
    pub activities: usize,
    pub materials: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            evidences: 3,
            activities: 2,
            materials: 3,
        }
    }
}

/// Runtime configuration for one viewer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub data_path: PathBuf,
    pub search_debounce: Duration,
    pub truncation: TruncationLimits,
    pub preview: PreviewLimits,
    pub labels: DisplayDefaults,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE_NAME),
            search_debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            truncation: TruncationLimits::default(),
            preview: PreviewLimits::default(),
            labels: DisplayDefaults::default(),
        }
    }
}

impl ViewerConfig {
    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides resolved through `lookup`.
    ///
    /// Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DATA_PATH_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.data_path = PathBuf::from(trimmed);
            }
        }

        if let Some(raw) = lookup(DEBOUNCE_MS_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.search_debounce = parse_debounce_ms(trimmed)?;
            }
        }

        Ok(config)
    }
}

/// Parses a positive millisecond count.
pub fn parse_debounce_ms(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidDebounce(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ViewerConfig, DATA_PATH_ENV, DEBOUNCE_MS_ENV};
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn defaults_match_viewer_constants() {
        let config = ViewerConfig::default();
        assert_eq!(config.data_path, PathBuf::from("logica_dba_actividades.json"));
        assert_eq!(config.search_debounce, Duration::from_millis(300));
        assert_eq!(config.truncation.statement, 120);
        assert_eq!(config.preview.activities, 2);
    }

    #[test]
    fn lookup_overrides_path_and_debounce() {
        let config = ViewerConfig::from_lookup(|key| match key {
            DATA_PATH_ENV => Some(" /data/dba.json ".to_string()),
            DEBOUNCE_MS_ENV => Some("150".to_string()),
            _ => None,
        })
        .expect("valid overrides");
        assert_eq!(config.data_path, PathBuf::from("/data/dba.json"));
        assert_eq!(config.search_debounce, Duration::from_millis(150));
    }

    #[test]
    fn lookup_rejects_zero_debounce() {
        let err = ViewerConfig::from_lookup(|key| {
            (key == DEBOUNCE_MS_ENV).then(|| "0".to_string())
        })
        .expect_err("zero debounce must be rejected");
        assert_eq!(err, ConfigError::InvalidDebounce("0".to_string()));
    }
}
