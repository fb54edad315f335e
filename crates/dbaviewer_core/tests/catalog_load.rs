use dbaviewer_core::{load_catalog, DataLoadError, JsonFileSource, StandardId};
use std::fs;

#[test]
fn loads_dataset_from_file_and_assigns_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logica_dba_actividades.json");
    fs::write(
        &path,
        r#"[
            {"nivel": "1°", "enunciado": "Cuenta", "evidencias_de_aprendizaje": ["Suma"]},
            {"nivel": "2°", "actividades_en_casa": [{"titulo": "Tapas", "materiales": null}]}
        ]"#,
    )
    .unwrap();

    let catalog = load_catalog(&JsonFileSource::new(&path)).unwrap();

    assert_eq!(catalog.len(), 2);
    let second = catalog.get(StandardId(1)).unwrap();
    assert_eq!(second.level.as_deref(), Some("2°"));
    assert!(second.home_activities[0].materials.is_empty());
    assert!(catalog.activity_ref(StandardId(1), 0).is_some());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_catalog(&JsonFileSource::new(&path)).unwrap_err();
    match &err {
        DataLoadError::Io { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"nivel\": ").unwrap();

    let err = load_catalog(&JsonFileSource::new(&path)).unwrap_err();
    assert!(matches!(err, DataLoadError::Parse { .. }));
}

#[test]
fn empty_array_loads_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    let catalog = load_catalog(&JsonFileSource::new(&path)).unwrap();
    assert!(catalog.is_empty());
}
