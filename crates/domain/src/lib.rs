//! Domain layer for the Harborlight backend.
//!
//! This crate contains:
//! - Domain models (Event, EventCategory, NewsletterSubscriber, ...)
//! - Request and response payloads with validation rules

pub mod models;
