use axum::extract::Request;
use tower_http::request_id::RequestId;
use tracing::Span;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Root span for one HTTP request, tagged with the id assigned by
/// `SetRequestIdLayer`.
pub fn make_request_span(request: &Request) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri().path()
    )
}
