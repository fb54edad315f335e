//! SQLite export of the catalog.

use crate::export::{ExportResult, ExportRow, ExportSummary};
use crate::model::catalog::Catalog;
use crate::model::standard::Activity;
use log::info;
use rusqlite::{params, Connection, Transaction};
use std::time::Instant;

/// Writes the catalog into a migrated connection in one transaction.
///
/// # Errors
/// - Returns `ExportError::Db` on any SQLite failure; nothing is committed.
pub fn export_to_sqlite(catalog: &Catalog, conn: &mut Connection) -> ExportResult<ExportSummary> {
    let started_at = Instant::now();
    let tx = conn.transaction()?;
    let mut summary = ExportSummary::default();

    for (_, standard) in catalog.iter() {
        match ExportRow::classify(standard) {
            ExportRow::Full {
                area,
                level,
                statement,
                example,
            } => {
                tx.execute(
                    "INSERT INTO estandares (area, nivel, enunciado, ejemplo) VALUES (?1, ?2, ?3, ?4)",
                    params![area, level, statement, example],
                )?;
                let standard_row = tx.last_insert_rowid();

                for evidence in &standard.evidences {
                    tx.execute(
                        "INSERT INTO evidencias (estandar_id, evidencia) VALUES (?1, ?2)",
                        params![standard_row, evidence],
                    )?;
                    summary.evidences += 1;
                }

                for (position, activity) in standard.home_activities.iter().enumerate() {
                    insert_activity(&tx, standard_row, position, activity)?;
                    summary.activities += 1;
                }
                summary.full += 1;
            }
            ExportRow::ExampleOnly { example } => {
                tx.execute(
                    "INSERT INTO estandares (ejemplo) VALUES (?1)",
                    params![example],
                )?;
                summary.example_only += 1;
            }
            ExportRow::Skipped => summary.skipped += 1,
        }
    }

    tx.commit()?;
    info!(
        "event=export_sqlite module=export status=ok full={} example_only={} skipped={} duration_ms={}",
        summary.full,
        summary.example_only,
        summary.skipped,
        started_at.elapsed().as_millis()
    );
    Ok(summary)
}

fn insert_activity(
    tx: &Transaction<'_>,
    standard_row: i64,
    position: usize,
    activity: &Activity,
) -> rusqlite::Result<()> {
    tx.execute(
        "INSERT INTO actividades (estandar_id, posicion, titulo) VALUES (?1, ?2, ?3)",
        params![standard_row, position as i64, activity.title],
    )?;
    let activity_row = tx.last_insert_rowid();

    let items = activity
        .materials
        .iter()
        .enumerate()
        .map(|(index, text)| ("material", index, text))
        .chain(
            activity
                .steps
                .iter()
                .enumerate()
                .map(|(index, text)| ("paso", index, text)),
        );
    for (kind, index, text) in items {
        tx.execute(
            "INSERT INTO actividad_items (actividad_id, tipo, posicion, texto) VALUES (?1, ?2, ?3, ?4)",
            params![activity_row, kind, index as i64, text],
        )?;
    }
    Ok(())
}
