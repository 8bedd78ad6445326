//! Entity extraction API endpoints

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::{
    api::dto::{
        RecordsEntitiesByTypeResponse, RecordsRequest, RecordsResponse,
    },
    error::ServerResult,
    state::AppState,
};

/// Extract named entities from a batch of records
#[utoipa::path(
    post,
    path = "/entities",
    tag = "ner",
    request_body = RecordsRequest,
    responses(
        (status = 200, description = "One result per input record, in input order", body = RecordsResponse),
        (status = 400, description = "Batch exceeds the configured maximum size"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn extract_entities(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecordsRequest>,
) -> ServerResult<Json<RecordsResponse>> {
    let records = body.values.into_iter().map(Into::into).collect();
    let outcomes = state.executor.execute(records).await?;

    Ok(Json(RecordsResponse {
        values: outcomes.into_iter().map(Into::into).collect(),
    }))
}

/// Extract named entities from a batch of records, grouped by entity label.
///
/// This route can be used directly as a custom skill in a cognitive-search
/// indexing pipeline: every result carries all entity categories, empty when
/// nothing matched, so skillset field mappings always resolve.
#[utoipa::path(
    post,
    path = "/entities_by_type",
    tag = "ner",
    request_body = RecordsRequest,
    responses(
        (status = 200, description = "One grouped result per input record, in input order", body = RecordsEntitiesByTypeResponse),
        (status = 400, description = "Batch exceeds the configured maximum size"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn extract_entities_by_type(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RecordsRequest>,
) -> ServerResult<Json<RecordsEntitiesByTypeResponse>> {
    let records = body.values.into_iter().map(Into::into).collect();
    let outcomes = state.executor.execute(records).await?;

    Ok(Json(RecordsEntitiesByTypeResponse {
        values: outcomes.into_iter().map(Into::into).collect(),
    }))
}
