use axum::Json;

use crate::models::health::HealthResponse;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is awake", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    tracing::debug!("liveness probe");
    Json(HealthResponse::awake())
}
