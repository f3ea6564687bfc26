//! JSON document file event source.
//!
//! # Responsibility
//! - Read exported promo documents (`[{id, title, benefit, imageUrl,
//!   category, startDate, endDate}, ...]`) from disk.
//! - Map document fields onto `PromoEvent`.
//!
//! # Invariants
//! - Unknown categories and unparsable dates reject only their record.
//! - Reversed date ranges are swapped, never rejected.
//! - `imageUrl` maps to `image`; a missing image becomes an empty string.

use crate::model::category::Category;
use crate::model::dates::parse_local_date;
use crate::model::promo::PromoEvent;
use crate::source::{EventSource, SourceError, SourceResult};
use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Document-shaped promo record as exported by the document store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromoDocument {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    benefit: String,
    #[serde(default)]
    image_url: Option<String>,
    category: String,
    start_date: String,
    end_date: String,
}

/// Event source reading a JSON array of promo documents.
#[derive(Debug, Clone)]
pub struct JsonFileEventSource {
    path: PathBuf,
}

impl JsonFileEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for JsonFileEventSource {
    fn source_id(&self) -> &str {
        "json_file"
    }

    fn fetch_events(&self) -> SourceResult<Vec<PromoEvent>> {
        let started_at = Instant::now();
        let raw = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let document = serde_json::from_str::<Value>(&raw)?;
        let events = ingest_documents(document)?;
        info!(
            "event=source_fetch module=source status=ok source=json_file count={} duration_ms={}",
            events.len(),
            started_at.elapsed().as_millis()
        );
        Ok(events)
    }
}

/// Converts a JSON array of promo documents into promos.
///
/// Records that cannot be converted are logged and skipped.
///
/// # Errors
/// - Returns `SourceError::NotAnArray` when `document` is not an array.
pub fn ingest_documents(document: Value) -> SourceResult<Vec<PromoEvent>> {
    let Value::Array(records) = document else {
        return Err(SourceError::NotAnArray);
    };

    let mut events = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match ingest_record(record) {
            Ok(promo) => events.push(promo),
            Err(reason) => warn!(
                "event=promo_ingest module=source status=skipped index={} reason={}",
                index, reason
            ),
        }
    }
    Ok(events)
}

fn ingest_record(record: Value) -> Result<PromoEvent, String> {
    let document = serde_json::from_value::<PromoDocument>(record)
        .map_err(|err| format!("malformed record: {err}"))?;
    let category = document
        .category
        .parse::<Category>()
        .map_err(|err| err.to_string())?;
    let start_date = parse_local_date(&document.start_date)
        .map_err(|err| format!("invalid startDate `{}`: {err}", document.start_date))?;
    let end_date = parse_local_date(&document.end_date)
        .map_err(|err| format!("invalid endDate `{}`: {err}", document.end_date))?;

    let promo = PromoEvent {
        id: document.id,
        title: document.title,
        benefit: document.benefit,
        image: document.image_url.unwrap_or_default(),
        category,
        start_date,
        end_date,
    };
    if promo.end_date < promo.start_date {
        warn!(
            "event=promo_normalize module=source status=swapped source=json_file id={}",
            promo.id
        );
    }
    let promo = promo.normalized();
    promo.validate().map_err(|err| err.to_string())?;
    Ok(promo)
}
