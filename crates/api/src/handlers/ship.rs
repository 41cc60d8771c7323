//! Handlers for the `/ships` resource.
//!
//! Query strings and path ids are taken as `Result<_, Rejection>` so
//! malformed values surface as `BAD_REQUEST` in the shared error envelope.
//! Request bodies are read as raw bytes: an empty body and a JSON `null`
//! both mean "no body".

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fleet_core::query::SortKey;
use fleet_core::ship::{Ship, ShipDraft, ShipPatch};
use fleet_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::query::ShipQueryParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Decode an optional JSON body.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

/// GET /rest/ships
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ShipQueryParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<Ship>>>> {
    let Query(params) = params?;
    let sort = params
        .order
        .as_deref()
        .map(SortKey::from_str_value)
        .transpose()?;

    let ships = state
        .queries
        .list(&params.criteria(), sort, params.page())
        .await?;
    Ok(Json(DataResponse { data: ships }))
}

/// GET /rest/ships/count
pub async fn count(
    State(state): State<AppState>,
    params: Result<Query<ShipQueryParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<usize>>> {
    let Query(params) = params?;
    let count = state.queries.count(&params.criteria()).await?;
    Ok(Json(DataResponse { data: count }))
}

/// POST /rest/ships
///
/// An empty body is rejected as a validation error. A client-supplied
/// `rating` is ignored; the stored rating is always computed.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<DataResponse<Ship>>)> {
    let draft = parse_body::<ShipDraft>(&body)?;
    let ship = state.lifecycle.create(draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: ship })))
}

/// GET /rest/ships/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<Ship>>> {
    let Path(id) = id?;
    let ship = state.lifecycle.read(id).await?;
    Ok(Json(DataResponse { data: ship }))
}

/// POST /rest/ships/{id} (also mounted as PUT)
///
/// Absent fields keep their stored values. An empty body re-saves the ship
/// with a recomputed rating.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<DataResponse<Ship>>> {
    let Path(id) = id?;
    let patch = parse_body::<ShipPatch>(&body)?.unwrap_or_default();
    let ship = state.lifecycle.update(id, patch).await?;
    Ok(Json(DataResponse { data: ship }))
}

/// DELETE /rest/ships/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.lifecycle.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
