//! Event source boundary.
//!
//! # Responsibility
//! - Define how promo collections enter the core.
//! - Validate and normalize records at ingestion, failing soft per record.
//!
//! # Invariants
//! - Sources never hand out promos with reversed date ranges.
//! - A malformed record is skipped and logged; it never fails the batch.

pub mod json_file;
pub mod memory;

use crate::model::promo::PromoEvent;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type SourceResult<T> = Result<T, SourceError>;

/// Batch-level event source failure.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    /// Document root is not a JSON array of records.
    NotAnArray,
    /// Failure reported by a source without a more specific shape.
    Unavailable(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read events from `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid events document: {err}"),
            Self::NotAnArray => write!(f, "events document must be a JSON array"),
            Self::Unavailable(message) => write!(f, "event source unavailable: {message}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::NotAnArray => None,
            Self::Unavailable(_) => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Supplier of the promo collection.
///
/// Calls are synchronous; scheduling and superseding fetches belong to the
/// caller.
pub trait EventSource {
    /// Short stable id used in log lines.
    fn source_id(&self) -> &str;
    fn fetch_events(&self) -> SourceResult<Vec<PromoEvent>>;
}

impl<S: EventSource + ?Sized> EventSource for &S {
    fn source_id(&self) -> &str {
        (**self).source_id()
    }

    fn fetch_events(&self) -> SourceResult<Vec<PromoEvent>> {
        (**self).fetch_events()
    }
}
