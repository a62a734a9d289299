use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_handler, health_handler, ingest_handler, models_handler, openapi_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    // `*` cannot be combined with credentials, so everything is mirrored.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/openapi.json", get(openapi_handler))
        .route("/api/health", get(health_handler))
        .route("/api/models", get(models_handler))
        .route("/api/ingest", post(ingest_handler))
        .route("/api/ask", post(ask_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
