//! Calendar controller around the layout engine.
//!
//! # Responsibility
//! - Own the promo collection and the calendar controls.
//! - Memoize the layout and invalidate it wholesale on any input change.
//! - Derive presentation data (filter bar, cards, header cells).
//!
//! # Invariants
//! - A failed fetch never replaces the current collection.
//! - `layout()` always equals `compute_layout` over the current inputs.

use crate::layout::columns::CategoryFilter;
use crate::layout::compute_layout;
use crate::layout::packer::{LaidOutPromo, PackedLayout};
use crate::layout::window::{
    day_columns, navigate, navigate_by, resolve_window, DayColumn, NavDirection, ViewMode,
    ViewWindow,
};
use crate::model::category::{Category, CategoryStyle};
use crate::model::promo::PromoEvent;
use crate::source::{EventSource, SourceResult};
use chrono::NaiveDate;
use log::{debug, error, info};
use std::time::Instant;

/// Lifecycle of the promo collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch has completed yet.
    Pending,
    /// Last fetch succeeded and replaced the collection.
    Loaded,
    /// Last fetch failed; the previous collection stays in effect.
    Failed,
}

/// One filter-bar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    pub category: Category,
    pub style: CategoryStyle,
    /// True when no filter is active or this category is the active one.
    pub highlighted: bool,
}

/// A laid-out promo plus the presentation flags derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCard {
    pub placement: LaidOutPromo,
    pub style: CategoryStyle,
    pub expired: bool,
}

/// Calendar controller facade.
pub struct CalendarService<S: EventSource> {
    source: S,
    events: Vec<PromoEvent>,
    load_state: LoadState,
    reference_date: NaiveDate,
    view_mode: ViewMode,
    active_filter: CategoryFilter,
    cached_layout: Option<PackedLayout>,
}

impl<S: EventSource> CalendarService<S> {
    /// Creates a service showing `reference_date` in `view_mode`.
    ///
    /// The collection starts empty until `refresh` succeeds.
    pub fn new(source: S, reference_date: NaiveDate, view_mode: ViewMode) -> Self {
        Self::with_initial_events(source, reference_date, view_mode, Vec::new())
    }

    /// Creates a service with a pre-seeded collection.
    pub fn with_initial_events(
        source: S,
        reference_date: NaiveDate,
        view_mode: ViewMode,
        initial_events: Vec<PromoEvent>,
    ) -> Self {
        Self {
            source,
            events: initial_events,
            load_state: LoadState::Pending,
            reference_date,
            view_mode,
            active_filter: None,
            cached_layout: None,
        }
    }

    /// Fetches from the source and replaces the collection on success.
    ///
    /// Failures are logged and the current collection is kept; the error is
    /// still returned for callers that want to surface it.
    pub fn refresh(&mut self) -> SourceResult<usize> {
        let started_at = Instant::now();
        match self.source.fetch_events() {
            Ok(events) => {
                let count = events.len();
                self.events = events;
                self.load_state = LoadState::Loaded;
                self.invalidate();
                info!(
                    "event=calendar_refresh module=service status=ok source={} count={} duration_ms={}",
                    self.source.source_id(),
                    count,
                    started_at.elapsed().as_millis()
                );
                Ok(count)
            }
            Err(err) => {
                self.load_state = LoadState::Failed;
                error!(
                    "event=calendar_refresh module=service status=error source={} kept={} duration_ms={} error={}",
                    self.source.source_id(),
                    self.events.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Whether the first fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Pending
    }

    pub fn events(&self) -> &[PromoEvent] {
        &self.events
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn active_filter(&self) -> CategoryFilter {
        self.active_filter
    }

    /// Moves the window one step (7 days in week mode, 1 in day mode).
    pub fn navigate(&mut self, direction: NavDirection) {
        self.reference_date = navigate(self.reference_date, self.view_mode, direction);
        self.invalidate();
    }

    /// Moves the window `steps` steps at once; negative values go back.
    pub fn navigate_by(&mut self, steps: i64) {
        let shifted = navigate_by(self.reference_date, self.view_mode, steps);
        self.set_reference_date(shifted);
    }

    pub fn set_reference_date(&mut self, date: NaiveDate) {
        if self.reference_date != date {
            self.reference_date = date;
            self.invalidate();
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            self.view_mode = mode;
            self.invalidate();
        }
    }

    /// Activates `category`, or clears the filter when it is already active.
    pub fn toggle_filter(&mut self, category: Category) {
        self.active_filter = if self.active_filter == Some(category) {
            None
        } else {
            Some(category)
        };
        self.invalidate();
    }

    pub fn clear_filter(&mut self) {
        if self.active_filter.is_some() {
            self.active_filter = None;
            self.invalidate();
        }
    }

    /// Days currently in view.
    pub fn window(&self) -> ViewWindow {
        resolve_window(self.reference_date, self.view_mode)
    }

    /// Header cells for the current window.
    pub fn header(&self, today: NaiveDate) -> Vec<DayColumn> {
        day_columns(&self.window(), today)
    }

    /// Current layout, recomputed only after an input changed.
    pub fn layout(&mut self) -> &PackedLayout {
        if self.cached_layout.is_none() {
            let window = self.window();
            let started_at = Instant::now();
            let layout = compute_layout(&self.events, &window, self.active_filter);
            debug!(
                "event=layout_pass module=service status=ok window={} filter={} events={} placed={} rows={} duration_us={}",
                window.label(),
                self.active_filter.map_or("none", Category::key),
                self.events.len(),
                layout.placed.len(),
                layout.row_count,
                started_at.elapsed().as_micros()
            );
            self.cached_layout = Some(layout);
        }
        self.cached_layout.get_or_insert_with(PackedLayout::default)
    }

    /// Filter-bar buttons in category order.
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        Category::ALL
            .into_iter()
            .map(|category| FilterButton {
                category,
                style: category.style(),
                highlighted: self.active_filter.map_or(true, |active| active == category),
            })
            .collect()
    }

    /// Cards for the current layout, flagging promos that ended before `today`.
    pub fn cards(&mut self, today: NaiveDate) -> Vec<PromoCard> {
        self.layout()
            .placed
            .iter()
            .map(|placement| PromoCard {
                style: placement.promo.category.style(),
                expired: placement.promo.is_expired(today),
                placement: placement.clone(),
            })
            .collect()
    }

    fn invalidate(&mut self) {
        self.cached_layout = None;
    }
}
