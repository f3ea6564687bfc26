//! Text rendering of a calendar layout.

use chrono::NaiveDate;
use promo_calendar_core::{CalendarService, EventSource, PromoCard};

const CELL_WIDTH: usize = 18;

/// Renders filter bar, header and one line per layout row.
pub fn render_calendar<S: EventSource>(
    service: &mut CalendarService<S>,
    today: NaiveDate,
) -> String {
    let window = service.window();
    let mut lines = Vec::new();

    let filters = service
        .filter_buttons()
        .iter()
        .map(|button| {
            if button.highlighted {
                format!("[{}]", button.style.label)
            } else {
                format!(" {} ", button.style.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!("{}  {}", window.label(), filters));

    lines.push(
        service
            .header(today)
            .iter()
            .map(|column| {
                let marker = if column.is_today { "*" } else { "" };
                fit(&format!("{}{}", column.date.format("%a %d"), marker), CELL_WIDTH)
            })
            .collect::<Vec<_>>()
            .join("|"),
    );
    lines.push("-".repeat(grid_width(window.column_count())));

    let cards = service.cards(today);
    let row_count = service.layout().row_count;
    if row_count == 0 {
        lines.push("(no promos in view)".to_string());
    }
    lines.extend((0..row_count).map(|row| {
        render_row(
            cards.iter().filter(|card| card.placement.row_index == row),
            window.column_count(),
        )
        .trim_end()
        .to_string()
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_row<'a>(cards: impl Iterator<Item = &'a PromoCard>, column_count: usize) -> String {
    let mut cells = vec![' '; grid_width(column_count)];
    for card in cards {
        let offset = (card.placement.col_start - 1) * (CELL_WIDTH + 1);
        let width = grid_width(card.placement.col_span);
        let label = card_label(card);
        let text = fit(&format!("[{label}]"), width);
        for (index, ch) in text.chars().enumerate() {
            if let Some(cell) = cells.get_mut(offset + index) {
                *cell = ch;
            }
        }
    }
    cells.into_iter().collect()
}

fn card_label(card: &PromoCard) -> String {
    let promo = &card.placement.promo;
    let title = if promo.title.is_empty() {
        promo.id.as_str()
    } else {
        promo.title.as_str()
    };
    let mut label = format!("{} {}", card.style.label, title);
    if !promo.benefit.is_empty() {
        label.push_str(&format!(" ({})", promo.benefit));
    }
    if card.expired {
        label.push_str(" EXP");
    }
    label
}

fn grid_width(columns: usize) -> usize {
    columns * CELL_WIDTH + columns.saturating_sub(1)
}

/// Truncates or pads `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{text:<width$}");
    }
    let mut truncated = text.chars().take(width.saturating_sub(2)).collect::<String>();
    truncated.push_str("~]");
    truncated.chars().take(width).collect()
}
