//! The [`Json`] [extractor] and related types.
//!
//! [extractor]: axum::extract

use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::StatusCode;
use mime::Mime;
use thiserror::Error;

use crate::http::response::ErrorResponse;

/// An extractor for JSON request bodies.
///
/// This type also implements [`IntoResponse`], which means it can be returned
/// from handlers. Unlike [`axum::Json`], rejections produce the same JSON
/// error body as every other error response in this API.
#[derive(Debug)]
pub struct Json<T>(pub T);

/// Rejection for the [`Json`] extractor.
#[derive(Debug, Error)]
pub enum JsonRejection {
	#[error("missing `Content-Type: application/json` header")]
	MissingJsonContentType,

	#[error("failed to buffer request body")]
	BufferRequestBody(#[from] BytesRejection),

	#[error("failed to deserialize request body: {0}")]
	DeserializeRequestBody(#[from] serde_json::Error),
}

impl<S, T> FromRequest<S> for Json<T>
where
	S: Send + Sync,
	T: for<'de> serde::Deserialize<'de>,
{
	type Rejection = JsonRejection;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		if !has_json_content_type(req.headers()) {
			return Err(JsonRejection::MissingJsonContentType);
		}

		let bytes = Bytes::from_request(req, state).await?;
		let value = serde_json::from_slice::<T>(&bytes)?;

		Ok(Self(value))
	}
}

impl<T> IntoResponse for Json<T>
where
	T: serde::Serialize,
{
	fn into_response(self) -> Response {
		axum::Json(self.0).into_response()
	}
}

impl IntoResponse for JsonRejection {
	fn into_response(self) -> Response {
		let status = match self {
			Self::MissingJsonContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
			Self::BufferRequestBody(_) => StatusCode::BAD_REQUEST,
			Self::DeserializeRequestBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
		};

		ErrorResponse::new(status, self.to_string()).into_response()
	}
}

/// Checks if the given `headers` contain a `Content-Type` header with a
/// JSON-related value.
fn has_json_content_type(headers: &http::HeaderMap) -> bool {
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		return false;
	};

	let Ok(content_type) = content_type.to_str() else {
		return false;
	};

	let Ok(mime) = content_type.parse::<Mime>() else {
		return false;
	};

	mime.type_() == "application"
		&& (mime.subtype() == "json" || mime.suffix().is_some_and(|name| name == "json"))
}
