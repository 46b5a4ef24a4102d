use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::term::{self, NewTerm, TermPatch};
use serde::Deserialize;
use service::{pagination::Pagination, term_service};
use tracing::info;

use crate::{errors::ApiError, routes::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of terms to skip
    pub skip: Option<u64>,
    /// Maximum number of terms to return (default 100)
    pub limit: Option<u64>,
}

/// List glossary terms, paginated by `skip` / `limit`.
#[utoipa::path(
    get, path = "/terms/", tag = "terms",
    params(ListQuery),
    responses(
        (status = 200, description = "Terms in insertion order", body = [crate::openapi::TermDoc]),
        (status = 422, description = "Invalid paging parameters", body = crate::openapi::DetailDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<term::Model>>, ApiError> {
    let Query(q) = query?;
    let rows = term_service::list_terms(&state.db, Pagination::new(q.skip, q.limit)).await?;
    info!(count = rows.len(), "list terms");
    Ok(Json(rows))
}

/// Get a single term by exact match.
#[utoipa::path(
    get, path = "/terms/{term}", tag = "terms",
    params(("term" = String, Path, description = "Exact term to look up")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::TermDoc),
        (status = 404, description = "Term not found", body = crate::openapi::DetailDoc,
            example = json!({"detail": "Term not found"}))
    )
)]
pub async fn get(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
) -> Result<Json<term::Model>, ApiError> {
    let Path(key) = key?;
    let found = term_service::get_term(&state.db, &key).await?;
    Ok(Json(found))
}

/// Create a new glossary term.
#[utoipa::path(
    post, path = "/terms/", tag = "terms",
    request_body = crate::openapi::TermCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TermDoc),
        (status = 400, description = "Term already exists", body = crate::openapi::DetailDoc,
            example = json!({"detail": "Term already exists"})),
        (status = 422, description = "Missing or empty field", body = crate::openapi::DetailDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewTerm>, JsonRejection>,
) -> Result<(StatusCode, Json<term::Model>), ApiError> {
    let Json(input) = body?;
    let created = term_service::create_term(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a term.
///
/// Only the supplied fields change; omitted fields keep their stored values.
#[utoipa::path(
    put, path = "/terms/{term}", tag = "terms",
    params(("term" = String, Path, description = "Term to update")),
    request_body = crate::openapi::TermUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TermDoc),
        (status = 400, description = "Term update failed", body = crate::openapi::DetailDoc),
        (status = 404, description = "Term not found", body = crate::openapi::DetailDoc),
        (status = 422, description = "Empty field", body = crate::openapi::DetailDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
    body: Result<Json<TermPatch>, JsonRejection>,
) -> Result<Json<term::Model>, ApiError> {
    let Path(key) = key?;
    let Json(patch) = body?;
    let updated = term_service::update_term(&state.db, &key, patch).await?;
    Ok(Json(updated))
}

/// Delete a term permanently.
#[utoipa::path(
    delete, path = "/terms/{term}", tag = "terms",
    params(("term" = String, Path, description = "Term to delete")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc,
            example = json!({"message": "Term deleted"})),
        (status = 404, description = "Term not found", body = crate::openapi::DetailDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(key) = key?;
    term_service::delete_term(&state.db, &key).await?;
    Ok(Json(Message::new("Term deleted")))
}
