//! Core logic for the promo calendar.
//! Lays time-bounded promos out on a 7-day (or 1-day) grid without overlap.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod service;
pub mod source;

pub use config::{CalendarConfig, ConfigError, ConfigResult};
pub use layout::columns::{layout_columns, overlaps_window, CategoryFilter, ClippedPromo};
pub use layout::compute_layout;
pub use layout::packer::{max_column_depth, pack_rows, LaidOutPromo, PackedLayout, RowOccupancy};
pub use layout::window::{
    day_columns, navigate, navigate_by, resolve_window, DayColumn, NavDirection, UnknownViewMode,
    ViewMode, ViewWindow,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryStyle, UnknownCategory};
pub use model::dates::{days_between, local_date_str, parse_local_date, today_local};
pub use model::promo::{PromoEvent, PromoId, PromoValidationError};
pub use service::calendar_service::{CalendarService, FilterButton, LoadState, PromoCard};
pub use source::json_file::{ingest_documents, JsonFileEventSource};
pub use source::memory::InMemoryEventSource;
pub use source::{EventSource, SourceError, SourceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
