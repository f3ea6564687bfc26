//! Calendar use-case services.
//!
//! # Responsibility
//! - Hold the calendar controls (reference date, view mode, filter).
//! - Re-run the layout engine when any input changes.
//! - Keep presentation callers decoupled from event source details.

pub mod calendar_service;
