//! In-memory event source.

use crate::model::promo::PromoEvent;
use crate::source::{EventSource, SourceError, SourceResult};
use log::warn;
use std::cell::RefCell;

/// Event source backed by a fixed collection.
///
/// Records are normalized on construction, same as file-backed sources.
#[derive(Debug, Default)]
pub struct InMemoryEventSource {
    events: RefCell<Vec<PromoEvent>>,
    failure: RefCell<Option<String>>,
}

impl InMemoryEventSource {
    pub fn new(events: Vec<PromoEvent>) -> Self {
        Self {
            events: RefCell::new(normalize_all(events)),
            failure: RefCell::new(None),
        }
    }

    /// Replaces the collection returned by later fetches.
    pub fn replace(&self, events: Vec<PromoEvent>) {
        *self.events.borrow_mut() = normalize_all(events);
    }

    /// Makes later fetches fail with `message` until cleared with `None`.
    pub fn set_failure(&self, message: Option<&str>) {
        *self.failure.borrow_mut() = message.map(str::to_string);
    }
}

impl EventSource for InMemoryEventSource {
    fn source_id(&self) -> &str {
        "memory"
    }

    fn fetch_events(&self) -> SourceResult<Vec<PromoEvent>> {
        if let Some(message) = self.failure.borrow().as_ref() {
            return Err(SourceError::Unavailable(message.clone()));
        }
        Ok(self.events.borrow().clone())
    }
}

fn normalize_all(events: Vec<PromoEvent>) -> Vec<PromoEvent> {
    events
        .into_iter()
        .map(|promo| {
            if promo.end_date < promo.start_date {
                warn!(
                    "event=promo_normalize module=source status=swapped source=memory id={}",
                    promo.id
                );
            }
            promo.normalized()
        })
        .collect()
}
