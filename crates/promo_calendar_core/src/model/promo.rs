//! Promo event domain model.
//!
//! # Responsibility
//! - Define the canonical promo record consumed by the layout engine.
//! - Provide validation and normalization used at ingestion time.
//!
//! # Invariants
//! - `id` is stable across re-fetches and never blank.
//! - `end_date` should not be earlier than `start_date`.
//! - Display fields (`title`, `benefit`, `image`) are opaque payload.

use crate::model::category::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a promo document.
///
/// Document stores hand out opaque string keys, so no format is imposed.
pub type PromoId = String;

/// Validation failures for `PromoEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoValidationError {
    /// `id` is empty after trimming.
    EmptyId,
    /// `end_date` precedes `start_date`.
    ReversedDateRange { start: NaiveDate, end: NaiveDate },
}

impl Display for PromoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "promo id must not be blank"),
            Self::ReversedDateRange { start, end } => {
                write!(f, "end_date ({end}) must be >= start_date ({start})")
            }
        }
    }
}

impl Error for PromoValidationError {}

/// One promotional event spanning an inclusive date range.
///
/// Serialized with the same camelCase keys as the source documents
/// (`startDate`, `endDate`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoEvent {
    pub id: PromoId,
    pub title: String,
    /// Short benefit text shown on the card badge.
    pub benefit: String,
    /// Image reference; empty when the source has none.
    #[serde(rename = "imageUrl")]
    pub image: String,
    pub category: Category,
    /// First day of the promo, inclusive.
    pub start_date: NaiveDate,
    /// Last day of the promo, inclusive.
    pub end_date: NaiveDate,
}

impl PromoEvent {
    /// Creates a promo with empty display payload.
    pub fn new(
        id: impl Into<PromoId>,
        category: Category,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            benefit: String::new(),
            image: String::new(),
            category,
            start_date,
            end_date,
        }
    }

    /// Sets the title, builder style.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the benefit text, builder style.
    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefit = benefit.into();
        self
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), PromoValidationError> {
        if self.id.trim().is_empty() {
            return Err(PromoValidationError::EmptyId);
        }
        if self.end_date < self.start_date {
            return Err(PromoValidationError::ReversedDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Returns a copy whose date range is ordered, swapping reversed bounds.
    pub fn normalized(mut self) -> Self {
        if self.end_date < self.start_date {
            std::mem::swap(&mut self.start_date, &mut self.end_date);
        }
        self
    }

    /// Inclusive number of days covered by the promo.
    pub fn duration_days(&self) -> i64 {
        self.end_date
            .signed_duration_since(self.start_date)
            .num_days()
            + 1
    }

    /// Whether the promo ended strictly before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }
}
