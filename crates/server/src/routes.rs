use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::store::TruckStore;

use crate::openapi::ApiDoc;

pub mod trucks;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Liveness message")))]
pub async fn liveness() -> &'static str {
    "Food Truck API is running"
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Health OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router around the injected store handle.
pub fn build_router(store: TruckStore, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .route("/food-trucks", get(trucks::list).post(trucks::create))
        .route(
            "/food-trucks/:locationid",
            get(trucks::get).put(trucks::update).delete(trucks::delete),
        )
        .with_state(store);

    api.merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
