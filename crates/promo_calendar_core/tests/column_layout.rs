use chrono::NaiveDate;
use promo_calendar_core::{
    layout_columns, resolve_window, Category, PromoEvent, ViewMode, ViewWindow,
};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn promo(id: &str, category: Category, start: &str, end: &str) -> PromoEvent {
    PromoEvent::new(id, category, date(start), date(end))
}

fn week_of_jan_1() -> ViewWindow {
    resolve_window(date("2024-01-01"), ViewMode::Week)
}

#[test]
fn event_inside_window_keeps_its_columns() {
    let clipped = layout_columns(
        &[promo("a", Category::ApuestaGratis, "2024-01-03", "2024-01-05")],
        &week_of_jan_1(),
        None,
    );
    assert_eq!(clipped.len(), 1);
    assert_eq!((clipped[0].col_start, clipped[0].col_span), (3, 3));
}

#[test]
fn event_starting_before_window_is_clipped_on_the_left() {
    let clipped = layout_columns(
        &[promo("b", Category::GirosGratis, "2023-12-30", "2024-01-02")],
        &week_of_jan_1(),
        None,
    );
    assert_eq!((clipped[0].col_start, clipped[0].col_span), (1, 2));
}

#[test]
fn event_ending_after_window_is_clipped_on_the_right() {
    let clipped = layout_columns(
        &[promo("c", Category::Supercuotas, "2024-01-06", "2024-01-10")],
        &week_of_jan_1(),
        None,
    );
    assert_eq!((clipped[0].col_start, clipped[0].col_span), (6, 2));
}

#[test]
fn events_outside_window_are_dropped_and_edges_are_kept() {
    let events = vec![
        promo("before", Category::ApuestaGratis, "2023-12-20", "2023-12-31"),
        promo("after", Category::ApuestaGratis, "2024-01-08", "2024-01-09"),
        promo("touch-first", Category::ApuestaGratis, "2023-12-31", "2024-01-01"),
        promo("touch-last", Category::ApuestaGratis, "2024-01-07", "2024-01-20"),
    ];
    let clipped = layout_columns(&events, &week_of_jan_1(), None);

    let ids = clipped
        .iter()
        .map(|item| item.promo.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["touch-first", "touch-last"]);
    assert_eq!((clipped[0].col_start, clipped[0].col_span), (1, 1));
    assert_eq!((clipped[1].col_start, clipped[1].col_span), (7, 1));
}

#[test]
fn category_filter_excludes_other_categories_regardless_of_dates() {
    let events = vec![
        promo("spins", Category::GirosGratis, "2024-01-02", "2024-01-03"),
        promo("bet", Category::ApuestaGratis, "2024-01-02", "2024-01-03"),
    ];
    let clipped = layout_columns(&events, &week_of_jan_1(), Some(Category::GirosGratis));

    assert_eq!(clipped.len(), 1);
    assert_eq!(clipped[0].promo.id, "spins");
}

#[test]
fn day_mode_clips_to_a_single_column() {
    let window = resolve_window(date("2024-01-03"), ViewMode::Day);
    let events = vec![
        promo("long", Category::Supercuotas, "2024-01-01", "2024-01-10"),
        promo("same-day", Category::Supercuotas, "2024-01-03", "2024-01-03"),
        promo("next-day", Category::Supercuotas, "2024-01-04", "2024-01-05"),
    ];
    let clipped = layout_columns(&events, &window, None);

    assert_eq!(clipped.len(), 2);
    for item in &clipped {
        assert_eq!((item.col_start, item.col_span), (1, 1));
    }
}

#[test]
fn every_output_stays_inside_the_grid() {
    let window = week_of_jan_1();
    let mut events = Vec::new();
    for start in 0..20_i64 {
        for length in 0..12_i64 {
            let start_date = date("2023-12-22") + chrono::Duration::days(start);
            let end_date = start_date + chrono::Duration::days(length);
            events.push(PromoEvent::new(
                format!("e-{start}-{length}"),
                Category::ApuestaGratis,
                start_date,
                end_date,
            ));
        }
    }

    let clipped = layout_columns(&events, &window, None);
    assert!(!clipped.is_empty());
    for item in &clipped {
        assert!(item.col_start >= 1);
        assert!(item.col_span >= 1);
        assert!(item.col_start + item.col_span - 1 <= window.column_count());
    }
    for event in &events {
        let inside = event.start_date >= window.first() && event.end_date <= window.last();
        let disjoint = event.end_date < window.first() || event.start_date > window.last();
        let present = clipped.iter().any(|item| item.promo.id == event.id);
        if inside {
            assert!(present, "{} should be visible", event.id);
        }
        if disjoint {
            assert!(!present, "{} should be hidden", event.id);
        }
    }
}
