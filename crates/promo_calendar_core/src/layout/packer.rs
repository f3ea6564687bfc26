//! Greedy first-fit row packing.
//!
//! # Responsibility
//! - Assign every clipped promo a row so that promos sharing a row never
//!   share a column.
//! - Report how many rows the grid needs.
//!
//! # Invariants
//! - For any placed promo, every column in its range is occupied in its row.
//! - A promo is never placed in a row where any of its columns is occupied.
//! - The result depends only on the input set, not on its iteration order.
//!
//! Promos are processed by ascending start column, wider first on ties, and
//! each goes to the lowest row with room. This is first-fit interval
//! coloring; cost is O(E x R) for E promos and R rows.

use crate::layout::columns::ClippedPromo;
use crate::model::promo::PromoEvent;
use serde::Serialize;
use std::cmp::Ordering;
use std::ops::Range;

/// A promo with its final grid placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaidOutPromo {
    #[serde(flatten)]
    pub promo: PromoEvent,
    /// 1-based first column.
    pub col_start: usize,
    /// Number of columns covered, at least 1.
    pub col_span: usize,
    /// 0-based stacking row.
    pub row_index: usize,
}

/// Output of one packing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackedLayout {
    /// Placed promos in processing order.
    pub placed: Vec<LaidOutPromo>,
    /// Rows needed to draw every promo without overlap.
    pub row_count: usize,
}

impl PackedLayout {
    /// Promos assigned to `row_index`, left to right.
    pub fn row(&self, row_index: usize) -> impl Iterator<Item = &LaidOutPromo> {
        self.placed
            .iter()
            .filter(move |placed| placed.row_index == row_index)
    }

    /// Placement for promo `id`, when visible.
    pub fn find(&self, id: &str) -> Option<&LaidOutPromo> {
        self.placed.iter().find(|placed| placed.promo.id == id)
    }
}

/// Growing matrix of per-row column occupancy, local to one packing pass.
///
/// Rows start `column_count` wide and widen when a range reaches past them,
/// so a range beyond the grid is packed rather than rejected.
#[derive(Debug, Clone)]
pub struct RowOccupancy {
    column_count: usize,
    rows: Vec<Vec<bool>>,
}

impl RowOccupancy {
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether every column of `columns` is free in `row`.
    ///
    /// Rows that do not exist yet are empty.
    pub fn fits(&self, row: usize, columns: Range<usize>) -> bool {
        match self.rows.get(row) {
            Some(cells) => cells
                .iter()
                .take(columns.end)
                .skip(columns.start)
                .all(|occupied| !occupied),
            None => true,
        }
    }

    /// Marks `columns` occupied in `row`, growing the matrix as needed.
    pub fn occupy(&mut self, row: usize, columns: Range<usize>) {
        while self.rows.len() <= row {
            self.rows.push(vec![false; self.column_count]);
        }
        let cells = &mut self.rows[row];
        if cells.len() < columns.end {
            cells.resize(columns.end, false);
        }
        for cell in &mut cells[columns] {
            *cell = true;
        }
    }

    /// Places `columns` in the first row with room and returns that row.
    pub fn place(&mut self, columns: Range<usize>) -> usize {
        let row = (0..self.rows.len())
            .find(|row| self.fits(*row, columns.clone()))
            .unwrap_or(self.rows.len());
        self.occupy(row, columns);
        row
    }
}

/// Assigns rows to `clipped` promos on a grid of `column_count` columns.
///
/// Placements reaching outside the grid are clamped onto it first, so the
/// output always satisfies the grid bound.
pub fn pack_rows(mut clipped: Vec<ClippedPromo>, column_count: usize) -> PackedLayout {
    for item in &mut clipped {
        item.clamp_to_grid(column_count);
    }
    clipped.sort_by(packing_order);

    let mut occupancy = RowOccupancy::new(column_count);
    let placed = clipped
        .into_iter()
        .map(|item| {
            let row_index = occupancy.place(item.column_range());
            LaidOutPromo {
                promo: item.promo,
                col_start: item.col_start,
                col_span: item.col_span,
                row_index,
            }
        })
        .collect::<Vec<_>>();

    PackedLayout {
        placed,
        row_count: occupancy.row_count(),
    }
}

/// Largest number of promos covering a single column.
///
/// No packing can use fewer rows than this. Placements are clamped onto the
/// grid the same way `pack_rows` clamps them.
pub fn max_column_depth(clipped: &[ClippedPromo], column_count: usize) -> usize {
    let mut depth = vec![0usize; column_count.max(1)];
    for item in clipped {
        for column in &mut depth[item.grid_range(column_count)] {
            *column += 1;
        }
    }
    depth.into_iter().max().unwrap_or(0)
}

// Start column ascending, span descending, then id and dates so equal
// placements never depend on input order.
fn packing_order(left: &ClippedPromo, right: &ClippedPromo) -> Ordering {
    left.col_start
        .cmp(&right.col_start)
        .then_with(|| right.col_span.cmp(&left.col_span))
        .then_with(|| left.promo.id.cmp(&right.promo.id))
        .then_with(|| left.promo.start_date.cmp(&right.promo.start_date))
        .then_with(|| left.promo.end_date.cmp(&right.promo.end_date))
}
