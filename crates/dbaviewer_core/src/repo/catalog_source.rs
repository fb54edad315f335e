//! Dataset source contracts and JSON implementations.
//!
//! # Responsibility
//! - Read the standards dataset once at startup.
//! - Report every failure through the single `DataLoadError` taxonomy.
//!
//! # Invariants
//! - Loading is all-or-nothing; no partial collections are returned.
//! - No retries: a load failure is terminal for the session.

use crate::model::catalog::Catalog;
use crate::model::standard::Standard;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type LoadResult<T> = Result<T, DataLoadError>;

/// Dataset load failure.
#[derive(Debug)]
pub enum DataLoadError {
    /// Dataset file is missing or unreadable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Dataset content is not a JSON array of standards.
    Parse { source: serde_json::Error },
}

impl Display for DataLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse { source } => write!(f, "invalid dataset JSON: {source}"),
        }
    }
}

impl Error for DataLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source } => Some(source),
        }
    }
}

impl From<serde_json::Error> for DataLoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse { source: value }
    }
}

/// Source of the raw standards collection.
pub trait CatalogSource {
    /// Short label used in diagnostics.
    fn describe(&self) -> String;
    fn load_standards(&self) -> LoadResult<Vec<Standard>>;
}

/// Reads the dataset from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn load_standards(&self) -> LoadResult<Vec<Standard>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| DataLoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        decode_standards(&raw)
    }
}

/// Decodes the dataset from an in-memory JSON string.
#[derive(Debug, Clone)]
pub struct JsonStrSource<'a> {
    raw: &'a str,
}

impl<'a> JsonStrSource<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }
}

impl CatalogSource for JsonStrSource<'_> {
    fn describe(&self) -> String {
        format!("memory:{}B", self.raw.len())
    }

    fn load_standards(&self) -> LoadResult<Vec<Standard>> {
        decode_standards(self.raw)
    }
}

/// Decodes a JSON array of standards.
pub fn decode_standards(raw: &str) -> LoadResult<Vec<Standard>> {
    Ok(serde_json::from_str::<Vec<Standard>>(raw)?)
}

/// Loads a full catalog from `source`.
///
/// # Side effects
/// - Emits `catalog_load` logging events with duration and status.
pub fn load_catalog(source: &dyn CatalogSource) -> LoadResult<Catalog> {
    let started_at = Instant::now();
    let label = source.describe();
    info!("event=catalog_load module=repo status=start source={label}");

    match source.load_standards() {
        Ok(standards) => {
            let catalog = Catalog::from_standards(standards);
            info!(
                "event=catalog_load module=repo status=ok source={label} count={} duration_ms={}",
                catalog.len(),
                started_at.elapsed().as_millis()
            );
            Ok(catalog)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=repo status=error source={label} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
