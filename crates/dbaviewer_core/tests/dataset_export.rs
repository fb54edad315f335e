use dbaviewer_core::db::open_db_in_memory;
use dbaviewer_core::{export_to_sqlite, load_catalog, render_sql_script, Catalog, JsonStrSource};
use rusqlite::Connection;

fn catalog() -> Catalog {
    let raw = serde_json::json!([
        {
            "area": "Matemáticas",
            "nivel": "4°",
            "enunciado": "Usa l'unidad de medida",
            "ejemplo": "Mide la mesa",
            "evidencias_de_aprendizaje": ["Compara longitudes", "Estima"],
            "actividades_en_casa": [
                {"titulo": "Medir", "materiales": ["Regla", "Cuaderno"], "paso_a_paso": ["Medir", "Anotar", "Comparar"]}
            ]
        },
        {"nivel": "4°", "ejemplo": "Solo ejemplo"},
        {"nivel": "5°", "enunciado": "Sin área ni ejemplo"}
    ])
    .to_string();
    load_catalog(&JsonStrSource::new(&raw)).unwrap()
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

#[test]
fn sqlite_export_writes_eligible_rows() {
    let mut conn = open_db_in_memory().unwrap();

    let summary = export_to_sqlite(&catalog(), &mut conn).unwrap();

    assert_eq!(summary.full, 1);
    assert_eq!(summary.example_only, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.evidences, 2);
    assert_eq!(summary.activities, 1);
    assert_eq!(count(&conn, "estandares"), 2);
    assert_eq!(count(&conn, "evidencias"), 2);
    assert_eq!(count(&conn, "actividades"), 1);
    assert_eq!(count(&conn, "actividad_items"), 5);

    let (area, statement): (Option<String>, Option<String>) = conn
        .query_row(
            "SELECT area, enunciado FROM estandares WHERE ejemplo = 'Solo ejemplo'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(area, None);
    assert_eq!(statement, None);

    let steps: Vec<String> = conn
        .prepare("SELECT texto FROM actividad_items WHERE tipo = 'paso' ORDER BY posicion")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(steps, vec!["Medir", "Anotar", "Comparar"]);
}

#[test]
fn sql_script_escapes_quotes_and_links_evidences() {
    let script = render_sql_script(&catalog());

    assert!(script.contains("CREATE TABLE IF NOT EXISTS estandares"));
    assert!(script.contains(
        "INSERT INTO estandares (area, nivel, enunciado, ejemplo) VALUES ('Matemáticas', '4°', 'Usa l''unidad de medida', 'Mide la mesa');"
    ));
    assert!(script.contains("SET @estandar_id = LAST_INSERT_ID();"));
    assert!(script.contains(
        "INSERT INTO evidencias (estandar_id, evidencia) VALUES (@estandar_id, 'Estima');"
    ));
    assert!(script.contains("INSERT INTO estandares (ejemplo) VALUES ('Solo ejemplo');"));
    assert!(!script.contains("Sin área ni ejemplo"));
}
