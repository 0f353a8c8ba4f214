use axum::extract::State;
use axum::{routing, Router};
use tracing::instrument;

use crate::http::extract::Json;
use crate::http::response::ErrorResponse;
use crate::sla::SlaTable;

pub fn router(table: SlaTable) -> Router {
	Router::new()
		.route("/sla", routing::get(get_sla_table))
		.route("/composite-sla", routing::post(compute_composite_sla))
		.with_state(table)
}

/// Request body for [`compute_composite_sla`].
#[derive(Debug, serde::Deserialize, utoipa::ToSchema)]
pub(crate) struct CompositeSlaRequest {
	/// The services to combine.
	///
	/// Order does not affect the result, and names may repeat.
	services: Vec<String>,
}

/// Response body for [`compute_composite_sla`].
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub(crate) struct CompositeSlaResponse {
	/// The product of the requested services' availabilities, rounded to 10
	/// decimal places.
	composite_sla: f64,
}

/// Returns the full availability table.
#[instrument]
#[utoipa::path(get, path = "/api/sla", tag = "SLA", responses(
	(status = 200, description = "every service with its availability fraction"),
))]
pub(crate) async fn get_sla_table(State(table): State<SlaTable>) -> Json<SlaTable> {
	Json(table)
}

/// Computes the combined availability of a set of services.
///
/// The services are assumed to fail independently, so the composite SLA is
/// simply the product of their individual availabilities.
#[instrument]
#[utoipa::path(
	post,
	path = "/api/composite-sla",
	tag = "SLA",
	request_body = CompositeSlaRequest,
	responses(
		(status = 200, body = CompositeSlaResponse),
		(status = 400, description = "a requested service is not in the table"),
	),
)]
pub(crate) async fn compute_composite_sla(
	State(table): State<SlaTable>,
	Json(CompositeSlaRequest { services }): Json<CompositeSlaRequest>,
) -> Result<Json<CompositeSlaResponse>, ErrorResponse> {
	let composite_sla = table.composite(&services)?;

	Ok(Json(CompositeSlaResponse { composite_sla }))
}
