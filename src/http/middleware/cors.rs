use tower_http::cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// A blanket-permissive CORS policy.
///
/// Any origin may call the API with any method and any headers, and
/// credentials are allowed. The literal wildcard origin cannot be combined
/// with credentials, so the request's own origin, method, and headers are
/// mirrored back instead.
pub fn layer() -> CorsLayer {
	CorsLayer::new()
		.allow_credentials(AllowCredentials::yes())
		.allow_headers(AllowHeaders::mirror_request())
		.allow_methods(AllowMethods::mirror_request())
		.allow_origin(AllowOrigin::mirror_request())
}
