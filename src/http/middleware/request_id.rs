use tower_http::request_id::{
	MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

pub fn set_layer() -> SetRequestIdLayer<Uuidv7> {
	SetRequestIdLayer::x_request_id(Uuidv7)
}

pub fn propagate_layer() -> PropagateRequestIdLayer {
	PropagateRequestIdLayer::x_request_id()
}

/// Generates a fresh UUIDv7 for every incoming request.
#[derive(Debug, Clone, Copy)]
pub struct Uuidv7;

impl MakeRequestId for Uuidv7 {
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId> {
		Uuid::now_v7()
			.hyphenated()
			.to_string()
			.parse::<http::HeaderValue>()
			.map(RequestId::new)
			.ok()
	}
}
