use std::time::Duration;

use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::request_id::RequestId;
use tower_http::trace::{
	DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, MakeSpan, OnFailure, OnResponse,
	TraceLayer,
};
use tracing::{debug, error, Span};

pub fn layer() -> TraceLayer<
	SharedClassifier<ServerErrorsAsFailures>,
	MakeRequestSpan,
	DefaultOnRequest,
	RecordResponse,
	DefaultOnBodyChunk,
	DefaultOnEos,
	LogFailure,
> {
	TraceLayer::new_for_http()
		.make_span_with(MakeRequestSpan)
		.on_response(RecordResponse)
		.on_failure(LogFailure)
}

#[derive(Debug, Clone, Copy)]
pub struct MakeRequestSpan;

impl<B> MakeSpan<B> for MakeRequestSpan {
	fn make_span(&mut self, request: &http::Request<B>) -> Span {
		let span = tracing::info_span! {
			target: "sla_api::http",
			"request",
			request.id = tracing::field::Empty,
			request.method = ?request.method(),
			request.uri = %request.uri(),
			response.status = tracing::field::Empty,
			latency = tracing::field::Empty,
		};

		if let Some(request_id) = request.extensions().get::<RequestId>() {
			span.record("request.id", tracing::field::debug(request_id));
		}

		span
	}
}

#[derive(Debug, Clone, Copy)]
pub struct RecordResponse;

impl<B> OnResponse<B> for RecordResponse {
	fn on_response(self, response: &http::Response<B>, latency: Duration, span: &Span) {
		span.record("response.status", format_args!("{}", response.status()))
			.record("latency", format_args!("{latency:?}"));
	}
}

#[derive(Debug, Clone, Copy)]
pub struct LogFailure;

impl OnFailure<ServerErrorsFailureClass> for LogFailure {
	fn on_failure(&mut self, failure: ServerErrorsFailureClass, _latency: Duration, _span: &Span) {
		match failure {
			ServerErrorsFailureClass::Error(error) => {
				error!(target: "sla_api::http", %error, "error occurred during request");
			}
			ServerErrorsFailureClass::StatusCode(status) if status.is_server_error() => {
				error!(target: "sla_api::http", %status, "error occurred during request");
			}
			ServerErrorsFailureClass::StatusCode(status) => {
				debug!(target: "sla_api::http", %status, "request failed");
			}
		}
	}
}
