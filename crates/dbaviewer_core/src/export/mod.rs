//! Dataset exports to relational form.
//!
//! # Responsibility
//! - Decide which standards are exportable and in which shape.
//! - Write the catalog into SQLite or render an equivalent SQL script.
//!
//! # Invariants
//! - Full rows require non-empty area, level and statement.
//! - Rows that are not full but carry an example are exported example-only.
//! - Everything else is skipped, never partially written.

use crate::db::DbError;
use crate::model::standard::Standard;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sql_script;
pub mod sqlite;

pub use sql_script::render_sql_script;
pub use sqlite::export_to_sqlite;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    Db(DbError),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "export failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for ExportError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for ExportError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Export shape of one standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportRow<'a> {
    Full {
        area: &'a str,
        level: &'a str,
        statement: &'a str,
        example: &'a str,
    },
    ExampleOnly {
        example: &'a str,
    },
    Skipped,
}

impl<'a> ExportRow<'a> {
    pub fn classify(standard: &'a Standard) -> Self {
        match (
            present(&standard.area),
            present(&standard.level),
            present(&standard.statement),
        ) {
            (Some(area), Some(level), Some(statement)) => Self::Full {
                area,
                level,
                statement,
                example: standard.example.as_deref().unwrap_or(""),
            },
            _ => match present(&standard.example) {
                Some(example) => Self::ExampleOnly { example },
                None => Self::Skipped,
            },
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Row counts written by an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub full: usize,
    pub example_only: usize,
    pub skipped: usize,
    pub evidences: usize,
    pub activities: usize,
}
