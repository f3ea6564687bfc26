//! Domain model for promotional calendar events.
//!
//! # Responsibility
//! - Define the promo record handed to the layout engine.
//! - Keep category keys in a closed enum with a total style mapping.
//! - Provide local-date helpers that never go through UTC.
//!
//! # Invariants
//! - Every promo is identified by a stable `PromoId`.
//! - `start_date <= end_date` is a precondition, enforced at ingestion.

pub mod category;
pub mod dates;
pub mod promo;
