use std::any::Any;

use axum::response::IntoResponse;
use http::StatusCode;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tracing::error;

use crate::http::response::ErrorResponse;

pub fn layer() -> CatchPanicLayer<PanicHandler> {
	CatchPanicLayer::custom(PanicHandler)
}

#[derive(Debug, Clone, Copy)]
pub struct PanicHandler;

impl ResponseForPanic for PanicHandler {
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		error: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody> {
		let error = error
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| error.downcast_ref::<String>().map(String::as_str));

		error!(?error, "http handler panicked");

		ErrorResponse::new(
			StatusCode::INTERNAL_SERVER_ERROR,
			"something went wrong; please report this incident",
		)
		.into_response()
	}
}
