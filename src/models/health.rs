use serde::Serialize;
use utoipa::ToSchema;

pub const AWAKE: &str = "awake";

/// Liveness payload returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "awake")]
    pub status: &'static str,
}

impl HealthResponse {
    pub fn awake() -> Self {
        Self { status: AWAKE }
    }
}
