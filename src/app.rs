use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::models::health::HealthResponse;
use crate::routes;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    paths(routes::health::health),
    components(schemas(HealthResponse)),
    tags((name = "health", description = "Liveness probe"))
)]
pub struct ApiDoc;

pub fn router(config: &Config) -> Router {
    let mut app = Router::new().route("/health", get(routes::health::health));

    if config.docs_enabled() {
        app = app.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()));
    }

    app.layer(TraceLayer::new_for_http())
}
