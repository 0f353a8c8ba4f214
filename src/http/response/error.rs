use std::borrow::Cow;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::sla::UnknownService;

/// A generic HTTP error response.
///
/// The body is a JSON object with a single `detail` member describing what
/// went wrong.
#[derive(Debug, Error)]
#[error("{detail}")]
pub struct ErrorResponse {
	status: StatusCode,
	detail: Cow<'static, str>,
}

#[derive(Debug, serde::Serialize)]
struct ErrorBody<'a> {
	detail: &'a str,
}

impl ErrorResponse {
	pub fn new(status: StatusCode, detail: impl Into<Cow<'static, str>>) -> Self {
		Self {
			status,
			detail: detail.into(),
		}
	}
}

impl From<UnknownService> for ErrorResponse {
	fn from(error: UnknownService) -> Self {
		Self::new(StatusCode::BAD_REQUEST, error.to_string())
	}
}

impl IntoResponse for ErrorResponse {
	fn into_response(self) -> Response {
		let body = axum::Json(ErrorBody {
			detail: &self.detail,
		});

		(self.status, body).into_response()
	}
}
