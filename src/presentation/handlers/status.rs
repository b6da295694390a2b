use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Server is running!",
    })
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
