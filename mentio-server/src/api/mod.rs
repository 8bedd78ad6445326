//! API implementation for the Mentio HTTP server

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::{Json, Redirect},
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

pub mod dto;
pub mod entities;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        entities::extract_entities,
        entities::extract_entities_by_type,
    ),
    components(
        schemas(
            dto::RecordsRequest,
            dto::Record,
            dto::RecordData,
            dto::RecordsResponse,
            dto::RecordEntities,
            dto::EntityList,
            dto::EntityMentionDto,
            dto::RecordsEntitiesByTypeResponse,
            dto::RecordEntitiesByType,
            dto::EntityCategories,
            dto::ErrorMessage,
        )
    ),
    tags(
        (name = "ner", description = "Batch named-entity recognition endpoints"),
    ),
    info(
        title = "Mentio NER Service",
        version = "1.0",
        description = "Batch named-entity recognition over HTTP, shaped to the cognitive-search custom skill contract."
    )
)]
pub struct ApiDoc;

/// Create the main router with all API endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let docs_url = format!("{}/docs", state.config.route_prefix);

    let mut openapi = ApiDoc::openapi();
    if !state.config.route_prefix.is_empty() {
        // The ingress strips the prefix; advertise it so generated clients
        // hit the externally visible paths
        openapi.servers = Some(vec![utoipa::openapi::Server::new(
            state.config.route_prefix.clone(),
        )]);
    }

    let api_router = Router::new()
        .route("/entities", post(entities::extract_entities))
        .route("/entities_by_type", post(entities::extract_entities_by_type))
        .route("/health", get(health_check))
        .with_state(state);

    let swagger_router = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi);

    Router::new()
        .route(
            "/",
            get(move || {
                let target = docs_url.clone();
                async move { Redirect::temporary(&target) }
            }),
        )
        .merge(api_router)
        .merge(swagger_router)
}

/// Health check endpoint with capability reporting
async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let capabilities = serde_json::json!({
        "status": "OK",
        "recognizer": state.recognizer.name(),
        "labels": state
            .recognizer
            .supported_labels()
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>(),
        "limits": {
            "max_batch_size": state.config.max_batch_size,
            "max_concurrency": state.config.max_concurrency,
        }
    });

    Json(capabilities)
}
