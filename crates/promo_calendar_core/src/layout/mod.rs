//! Calendar layout engine.
//!
//! # Responsibility
//! - Resolve the window of days in view (`window`).
//! - Select and clip promos to the window's columns (`columns`).
//! - Stack overlapping promos into rows (`packer`).
//!
//! # Invariants
//! - Every stage is a pure function of its inputs; no state survives a pass.
//! - Data flows one way: columns output feeds the packer, never the reverse.

pub mod columns;
pub mod packer;
pub mod window;

use crate::model::promo::PromoEvent;
use columns::{layout_columns, CategoryFilter};
use packer::{pack_rows, PackedLayout};
use window::ViewWindow;

/// Runs one full layout pass: filter, clip, then pack.
///
/// Identical inputs always yield an identical `PackedLayout`, regardless of
/// the iteration order of `events`.
pub fn compute_layout(
    events: &[PromoEvent],
    window: &ViewWindow,
    filter: CategoryFilter,
) -> PackedLayout {
    let clipped = layout_columns(events, window, filter);
    pack_rows(clipped, window.column_count())
}
