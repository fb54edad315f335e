//! SQL script rendering for MySQL-style targets.

use crate::export::ExportRow;
use crate::model::catalog::Catalog;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS estandares (
    id INT AUTO_INCREMENT PRIMARY KEY,
    area VARCHAR(100),
    nivel VARCHAR(10),
    enunciado TEXT,
    ejemplo TEXT
);

CREATE TABLE IF NOT EXISTS evidencias (
    id INT AUTO_INCREMENT PRIMARY KEY,
    estandar_id INT,
    evidencia TEXT,
    FOREIGN KEY (estandar_id) REFERENCES estandares(id)
);
";

/// Renders the catalog as a SQL script.
///
/// Each full row is followed by `SET @estandar_id = LAST_INSERT_ID();` and
/// its evidence inserts; example-only rows insert just `ejemplo`.
pub fn render_sql_script(catalog: &Catalog) -> String {
    let mut lines = vec![SCHEMA_SQL.to_string()];

    for (_, standard) in catalog.iter() {
        match ExportRow::classify(standard) {
            ExportRow::Full {
                area,
                level,
                statement,
                example,
            } => {
                lines.push(format!(
                    "INSERT INTO estandares (area, nivel, enunciado, ejemplo) VALUES ('{}', '{}', '{}', '{}');",
                    escape_sql(area),
                    escape_sql(level),
                    escape_sql(statement),
                    escape_sql(example)
                ));
                lines.push("SET @estandar_id = LAST_INSERT_ID();".to_string());
                lines.extend(standard.evidences.iter().map(|evidence| {
                    format!(
                        "INSERT INTO evidencias (estandar_id, evidencia) VALUES (@estandar_id, '{}');",
                        escape_sql(evidence)
                    )
                }));
            }
            ExportRow::ExampleOnly { example } => lines.push(format!(
                "INSERT INTO estandares (ejemplo) VALUES ('{}');",
                escape_sql(example)
            )),
            ExportRow::Skipped => {}
        }
    }

    lines.join("\n")
}

fn escape_sql(value: &str) -> String {
    value.replace('\'', "''")
}
