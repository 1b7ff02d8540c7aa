use axum::http::StatusCode;

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    security([]),
    tags = ["health"]
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
