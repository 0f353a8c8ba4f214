//! HTTP plumbing shared by every endpoint.

use axum::Router;

use crate::sla::SlaTable;

pub(crate) mod extract;
pub(crate) mod response;

mod middleware;

/// Returns the top-level router.
///
/// This is what we pass to [`axum::serve()`].
pub(crate) fn router(table: SlaTable) -> Router {
	Router::new()
		.nest("/api", crate::sla::http::router(table))
		.layer(middleware::catch_panic::layer())
		.layer(middleware::cors::layer())
		.layer(middleware::trace::layer())
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
		.merge(crate::openapi::swagger_ui())
}

#[cfg(test)]
mod tests {
	use axum::body::Body;
	use http::{header, Method, Request, StatusCode};
	use tower::ServiceExt;

	use super::*;

	#[tokio::test]
	async fn responses_carry_a_request_id() {
		let response = router(SlaTable::default())
			.oneshot(
				Request::builder()
					.uri("/api/sla")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);
		assert!(response.headers().contains_key("x-request-id"));
	}

	#[tokio::test]
	async fn cors_allows_any_origin_with_credentials() {
		let preflight = Request::builder()
			.method(Method::OPTIONS)
			.uri("/api/composite-sla")
			.header(header::ORIGIN, "https://dashboard.example.com")
			.header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
			.header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
			.body(Body::empty())
			.unwrap();

		let response = router(SlaTable::default()).oneshot(preflight).await.unwrap();

		assert_eq!(
			response
				.headers()
				.get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
				.and_then(|value| value.to_str().ok()),
			Some("https://dashboard.example.com"),
		);
		assert_eq!(
			response
				.headers()
				.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
				.and_then(|value| value.to_str().ok()),
			Some("true"),
		);
	}
}
