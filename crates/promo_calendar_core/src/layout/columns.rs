//! Visibility filter and column clipping.
//!
//! # Invariants
//! - Output only contains promos overlapping the window, bounds inclusive.
//! - For every output, `1 <= col_start` and
//!   `col_start + col_span - 1 <= window.column_count()`.

use crate::layout::window::ViewWindow;
use crate::model::category::Category;
use crate::model::dates::days_between;
use crate::model::promo::PromoEvent;
use serde::Serialize;

/// Active category filter; `None` keeps every category.
pub type CategoryFilter = Option<Category>;

/// A visible promo annotated with its clipped grid columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClippedPromo {
    #[serde(flatten)]
    pub promo: PromoEvent,
    /// 1-based first column.
    pub col_start: usize,
    /// Number of columns covered, at least 1.
    pub col_span: usize,
}

impl ClippedPromo {
    /// Zero-based, half-open column range `[start, end)`.
    ///
    /// A `col_start` of 0 is read as column 1 and a `col_span` of 0 as one
    /// column, so hand-built values still yield a non-empty range.
    pub fn column_range(&self) -> std::ops::Range<usize> {
        let start = self.col_start.saturating_sub(1);
        start..start.saturating_add(self.col_span.max(1))
    }

    /// Zero-based column range clamped onto a grid of `column_count` columns.
    ///
    /// Never empty; equals `column_range` for values produced by
    /// `layout_columns` against the same grid.
    pub fn grid_range(&self, column_count: usize) -> std::ops::Range<usize> {
        let column_count = column_count.max(1);
        let col_start = self.col_start.clamp(1, column_count);
        let col_span = self.col_span.clamp(1, column_count - col_start + 1);
        col_start - 1..col_start - 1 + col_span
    }

    /// Pulls the placement back inside a grid of `column_count` columns.
    pub fn clamp_to_grid(&mut self, column_count: usize) {
        let columns = self.grid_range(column_count);
        self.col_start = columns.start + 1;
        self.col_span = columns.len();
    }
}

/// Inclusive-range overlap test between `promo` and `window`.
pub fn overlaps_window(promo: &PromoEvent, window: &ViewWindow) -> bool {
    promo.end_date >= window.first() && promo.start_date <= window.last()
}

/// Selects promos visible in `window` and computes their clipped columns.
///
/// Output order follows `events`; ordering is imposed by the packer.
pub fn layout_columns(
    events: &[PromoEvent],
    window: &ViewWindow,
    filter: CategoryFilter,
) -> Vec<ClippedPromo> {
    let column_count = window.column_count() as i64;
    events
        .iter()
        .filter(|promo| filter.map_or(true, |category| promo.category == category))
        .filter(|promo| overlaps_window(promo, window))
        .map(|promo| {
            let (col_start, col_span) = clip_columns(
                days_between(window.first(), promo.start_date),
                days_between(promo.start_date, promo.end_date) + 1,
                column_count,
            );
            ClippedPromo {
                promo: promo.clone(),
                col_start,
                col_span,
            }
        })
        .collect()
}

/// Clips a run starting `start_offset` days into the window and lasting
/// `duration` days to `[1, column_count]`.
fn clip_columns(start_offset: i64, duration: i64, column_count: i64) -> (usize, usize) {
    let mut col_start = start_offset + 1;
    let mut col_span = duration;

    if start_offset < 0 {
        col_start = 1;
        col_span = duration + start_offset;
    }

    if col_start + col_span - 1 > column_count {
        col_span = column_count - col_start + 1;
    }

    // Degenerate input (reversed dates) can drive the span to zero or below.
    col_span = col_span.max(1);
    // Keeps the grid bound for runs that start past the last column.
    col_start = col_start.clamp(1, column_count.max(1));
    col_span = col_span.min(column_count - col_start + 1).max(1);

    (col_start as usize, col_span as usize)
}
