use axum::Router;
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

static DESCRIPTION: &str = "\
HTTP API for looking up service availability targets and computing composite SLAs.

`GET /api/sla` returns the full availability table. `POST /api/composite-sla` multiplies the
availabilities of the requested services, treating them as independent, and returns the product
rounded to 10 decimal places.

Error responses are JSON objects with a single `detail` member describing what went wrong.
";

#[derive(utoipa::OpenApi)]
#[openapi(
	info(title = "SLA API", description = DESCRIPTION),
	components(schemas(
		crate::sla::http::CompositeSlaRequest,
		crate::sla::http::CompositeSlaResponse,
	)),
	paths(
		crate::sla::http::get_sla_table,
		crate::sla::http::compute_composite_sla,
	)
)]
pub struct Schema;

impl Schema {
	pub fn generate() -> OpenApi {
		<Self as utoipa::OpenApi>::openapi()
	}
}

pub fn swagger_ui<S>() -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	let config = utoipa_swagger_ui::Config::from("/docs/openapi.json")
		.display_operation_id(true)
		.use_base_layout()
		.try_it_out_enabled(true);

	SwaggerUi::new("/docs/swagger-ui")
		.url("/docs/openapi.json", Schema::generate())
		.config(config)
		.into()
}
