use chrono::NaiveDate;
use promo_calendar_core::{
    compute_layout, CalendarService, Category, InMemoryEventSource, LoadState, NavDirection,
    PromoEvent, ViewMode,
};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn promo(id: &str, category: Category, start: &str, end: &str) -> PromoEvent {
    PromoEvent::new(id, category, date(start), date(end))
}

fn sample_promos() -> Vec<PromoEvent> {
    vec![
        promo("bet", Category::ApuestaGratis, "2024-01-01", "2024-01-03"),
        promo("spins", Category::GirosGratis, "2024-01-02", "2024-01-04"),
        promo("boost", Category::Supercuotas, "2024-01-08", "2024-01-09"),
    ]
}

#[test]
fn refresh_replaces_collection_and_marks_loaded() {
    let source = InMemoryEventSource::new(sample_promos());
    let mut service = CalendarService::new(&source, date("2024-01-01"), ViewMode::Week);
    assert!(service.is_loading());
    assert!(service.layout().placed.is_empty());

    assert_eq!(service.refresh().unwrap(), 3);
    assert_eq!(service.load_state(), LoadState::Loaded);
    assert_eq!(service.layout().placed.len(), 2);
    assert_eq!(service.layout().row_count, 2);
}

#[test]
fn failed_refresh_keeps_previous_collection() {
    let source = InMemoryEventSource::new(sample_promos());
    let mut service = CalendarService::new(&source, date("2024-01-01"), ViewMode::Week);
    service.refresh().unwrap();

    source.set_failure(Some("backend offline"));
    let err = service.refresh().unwrap_err();
    assert!(err.to_string().contains("backend offline"));
    assert_eq!(service.load_state(), LoadState::Failed);
    assert_eq!(service.events().len(), 3);
    assert_eq!(service.layout().placed.len(), 2);
}

#[test]
fn failed_first_refresh_keeps_initial_events() {
    let source = InMemoryEventSource::default();
    source.set_failure(Some("timeout"));
    let mut service = CalendarService::with_initial_events(
        &source,
        date("2024-01-01"),
        ViewMode::Week,
        sample_promos(),
    );

    assert!(service.refresh().is_err());
    assert!(!service.is_loading());
    assert_eq!(service.events().len(), 3);
}

#[test]
fn navigation_moves_window_and_recomputes_layout() {
    let source = InMemoryEventSource::new(sample_promos());
    let mut service = CalendarService::new(&source, date("2024-01-01"), ViewMode::Week);
    service.refresh().unwrap();

    service.navigate(NavDirection::Next);
    assert_eq!(service.reference_date(), date("2024-01-08"));
    let ids = service
        .layout()
        .placed
        .iter()
        .map(|placed| placed.promo.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["boost".to_string()]);

    service.set_view_mode(ViewMode::Day);
    service.navigate(NavDirection::Prev);
    assert_eq!(service.reference_date(), date("2024-01-07"));
    assert!(service.layout().placed.is_empty());
}

#[test]
fn toggling_the_active_filter_clears_it() {
    let source = InMemoryEventSource::new(sample_promos());
    let mut service = CalendarService::new(&source, date("2024-01-01"), ViewMode::Week);
    service.refresh().unwrap();

    service.toggle_filter(Category::GirosGratis);
    assert_eq!(service.active_filter(), Some(Category::GirosGratis));
    assert_eq!(service.layout().placed.len(), 1);
    assert_eq!(service.layout().placed[0].promo.id, "spins");

    service.toggle_filter(Category::GirosGratis);
    assert_eq!(service.active_filter(), None);
    assert_eq!(service.layout().placed.len(), 2);
}

#[test]
fn filter_buttons_highlight_all_or_only_the_active_category() {
    let source = InMemoryEventSource::default();
    let mut service = CalendarService::new(&source, date("2024-01-01"), ViewMode::Week);

    assert!(service.filter_buttons().iter().all(|button| button.highlighted));

    service.toggle_filter(Category::Supercuotas);
    let highlighted = service
        .filter_buttons()
        .into_iter()
        .filter(|button| button.highlighted)
        .map(|button| button.category)
        .collect::<Vec<_>>();
    assert_eq!(highlighted, vec![Category::Supercuotas]);
    assert_eq!(service.filter_buttons()[0].style.label, "Apuesta Gratis");

    service.clear_filter();
    assert_eq!(service.active_filter(), None);
}

#[test]
fn memoized_layout_matches_a_fresh_computation() {
    let source = InMemoryEventSource::new(sample_promos());
    let mut service = CalendarService::new(&source, date("2023-12-31"), ViewMode::Week);
    service.refresh().unwrap();

    let first = service.layout().clone();
    let second = service.layout().clone();
    assert_eq!(first, second);

    source.replace(vec![promo("late", Category::ApuestaGratis, "2024-01-05", "2024-01-05")]);
    service.refresh().unwrap();
    let window = service.window();
    let expected = compute_layout(service.events(), &window, service.active_filter());
    assert_eq!(service.layout(), &expected);
    assert_eq!(expected.placed[0].col_start, 6);
}

#[test]
fn cards_flag_expired_promos_and_carry_category_style() {
    let source = InMemoryEventSource::new(sample_promos());
    let mut service = CalendarService::new(&source, date("2024-01-01"), ViewMode::Week);
    service.refresh().unwrap();

    let cards = service.cards(date("2024-01-04"));
    let bet = cards
        .iter()
        .find(|card| card.placement.promo.id == "bet")
        .unwrap();
    assert!(bet.expired);
    assert_eq!(bet.style.icon, "fas fa-gift");

    let spins = cards
        .iter()
        .find(|card| card.placement.promo.id == "spins")
        .unwrap();
    assert!(!spins.expired, "a promo ending today is still live");
}

#[test]
fn header_marks_today_inside_the_window() {
    let source = InMemoryEventSource::default();
    let service = CalendarService::new(&source, date("2024-01-01"), ViewMode::Week);

    let header = service.header(date("2024-01-07"));
    assert!(header[6].is_today);
    assert!(header[..6].iter().all(|column| !column.is_today));
}

#[test]
fn navigate_by_moves_several_steps_at_once() {
    let source = InMemoryEventSource::new(sample_promos());
    let mut service = CalendarService::new(&source, date("2024-01-01"), ViewMode::Week);
    service.refresh().unwrap();
    assert_eq!(service.layout().placed.len(), 2);

    service.navigate_by(-2);
    assert_eq!(service.reference_date(), date("2023-12-18"));
    assert!(service.layout().placed.is_empty());

    service.navigate_by(3);
    assert_eq!(service.reference_date(), date("2024-01-08"));
    assert_eq!(service.layout().placed.len(), 1);

    service.navigate_by(i64::from(i32::MAX));
    assert_eq!(service.reference_date(), date("2024-01-08"));
}
