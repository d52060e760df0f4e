//! Shared utilities and common types for the Harborlight backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Offset-based pagination parameters
//! - Common validation logic (slugs, SEO excerpts)

pub mod pagination;
pub mod validation;
