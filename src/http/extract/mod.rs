//! Custom [extractors].
//!
//! Wrappers around existing extractors that only alter the rejection
//! responses.
//!
//! [extractors]: axum::extract

pub mod json;
pub use json::Json;
