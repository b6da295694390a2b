use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderName;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::SpreadsheetReader;
use crate::infrastructure::observability::{REQUEST_ID_HEADER, make_request_span};
use crate::presentation::handlers::{check_redundancy_handler, health_handler, home_handler};
use crate::presentation::state::AppState;

pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: SpreadsheetReader + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(make_request_span)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/check_redundancy", post(check_redundancy_handler::<R>))
        .layer(body_limit)
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}
