//! Generic HTTP responses.

mod error;
pub use error::ErrorResponse;
