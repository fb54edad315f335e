use dbaviewer_core::{
    load_catalog, CatalogService, JsonStrSource, ModalState, StandardId, ViewMode, ViewerConfig,
};
use std::time::{Duration, Instant};

fn service() -> CatalogService {
    let raw = serde_json::json!([
        {
            "nivel": "1°",
            "area": "Matemáticas",
            "enunciado": "Cuenta colecciones de objetos",
            "evidencias_de_aprendizaje": ["Cuenta hasta 20", "Compara cantidades", "Agrupa", "Ordena"]
        },
        {
            "nivel": "2°",
            "enunciado": "Resuelve problemas de suma",
            "actividades_en_casa": [
                {"titulo": "Mercado en casa", "materiales": ["Monedas de juguete"], "paso_a_paso": ["Poner precios", "Pagar"]},
                {"titulo": "Dados", "materiales": ["Dos dados"], "paso_a_paso": ["Lanzar", "Sumar"]},
                {"materiales": ["Fichas"], "paso_a_paso": []}
            ]
        },
        {
            "nivel": "2°",
            "enunciado": "Mide con unidades no estandarizadas",
            "actividades_en_casa": [{"titulo": "Pasos", "materiales": [], "paso_a_paso": ["Caminar"]}]
        }
    ])
    .to_string();
    let catalog = load_catalog(&JsonStrSource::new(&raw)).unwrap();
    CatalogService::new(catalog, ViewerConfig::default())
}

#[test]
fn starts_unfiltered_in_cards_mode() {
    let service = service();
    let page = service.page();

    assert_eq!(page.view_mode, ViewMode::Cards);
    assert_eq!(page.cards.len(), 3);
    assert!(!page.stats.filtered_differs());
    assert_eq!(page.cards[0].hidden_evidence_count, 1);
    assert!(page.cards[1].show_all_activities);
    assert_eq!(service.grade_options(), vec!["1°".to_string(), "2°".to_string()]);
}

#[test]
fn search_input_is_debounced() {
    let mut service = service();
    let start = Instant::now();

    service.on_search_input("s", start);
    service.on_search_input("su", start + Duration::from_millis(100));
    service.on_search_input("suma", start + Duration::from_millis(200));

    assert!(!service.poll(start + Duration::from_millis(450)));
    assert_eq!(service.filtered().len(), 3);

    assert!(service.poll(start + Duration::from_millis(500)));
    assert_eq!(service.filtered().ids, vec![StandardId(1)]);
    assert_eq!(service.filter_input().search, "suma");
    assert!(service.stats().filtered_differs());
}

#[test]
fn flush_runs_pending_search_immediately() {
    let mut service = service();
    service.on_search_input("caminar", Instant::now());
    assert!(service.search_pending());

    assert!(service.flush_search());
    assert_eq!(service.filtered().ids, vec![StandardId(2)]);
    assert!(!service.flush_search());
}

#[test]
fn grade_change_filters_immediately_and_clears_with_none() {
    let mut service = service();
    assert_eq!(
        service.set_grade(Some("2°".to_string())).ids,
        vec![StandardId(1), StandardId(2)]
    );
    assert_eq!(service.set_grade(None).len(), 3);
}

#[test]
fn toggling_activities_only_twice_restores_previous_set() {
    let mut service = service();
    service.set_search("cuenta");
    let before = service.filtered().clone();

    assert!(service.toggle_activities_only());
    assert!(service.filtered().is_empty());
    assert!(service.page().is_empty());

    assert!(!service.toggle_activities_only());
    assert_eq!(service.filtered(), &before);
}

#[test]
fn view_mode_change_does_not_refilter() {
    let mut service = service();
    service.set_grade(Some("1°".to_string()));
    let before = service.filtered().clone();

    service.set_view_mode(ViewMode::List);

    assert_eq!(service.filtered(), &before);
    assert_eq!(service.page().view_mode, ViewMode::List);
}

#[test]
fn opening_activity_from_standard_modal_keeps_one_modal_open() {
    let mut service = service();

    let standard = service.open_standard(StandardId(1)).unwrap();
    assert_eq!(standard.title, "Matemáticas - 2°");
    assert_eq!(standard.activities.len(), 3);
    assert_eq!(standard.activities[2].title, "Actividad sin título");
    assert!(service.ui().standard_modal_open());

    let link = standard.activities[1].target;
    let activity = service
        .open_activity(link.standard(), link.index())
        .unwrap();
    assert_eq!(activity.title, "Dados");
    assert_eq!(activity.steps, vec!["Lanzar".to_string(), "Sumar".to_string()]);
    assert_eq!(activity.related.statement, "Resuelve problemas de suma");

    assert!(!service.ui().standard_modal_open());
    assert!(service.ui().activity_modal_open());
    assert_eq!(service.ui().current_activity_index(), Some(1));
    assert!(service.standard_modal().is_none());
    assert_eq!(service.activity_modal(), Some(activity));
}

#[test]
fn escape_closes_everything_and_unlocks_scroll() {
    let mut service = service();
    service.open_activity(StandardId(2), 0).unwrap();
    assert!(service.ui().scroll_locked());

    service.close_modals();

    assert_eq!(service.ui().modal(), ModalState::Closed);
    assert!(!service.ui().scroll_locked());
}

#[test]
fn modal_references_survive_refiltering() {
    let mut service = service();
    service.open_standard(StandardId(2)).unwrap();

    service.set_grade(Some("1°".to_string()));

    let modal = service.standard_modal().unwrap();
    assert_eq!(modal.id, StandardId(2));
    assert_eq!(modal.statement, "Mide con unidades no estandarizadas");
}
