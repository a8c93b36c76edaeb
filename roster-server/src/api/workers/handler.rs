//! Worker API Handlers
//!
//! Every mutating operation answers with the resulting record state, so
//! callers can confirm applied changes without a follow-up read. Unknown ids
//! answer 404 uniformly.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{RmPaidUpdate, Worker, WorkerCreate, WorkerUpdate};
use crate::utils::{ApiMessage, AppError, AppJson, AppResult};

/// GET /workers — the full collection
#[utoipa::path(
    get,
    path = "/workers",
    tag = "Workers",
    responses(
        (status = 200, description = "All worker records", body = [Worker]),
    )
)]
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Worker>>> {
    let workers = state.workers().find_all().await?;
    Ok(Json(workers))
}

/// GET /worker/{id} — a single record
#[utoipa::path(
    get,
    path = "/worker/{id}",
    tag = "Workers",
    params(
        ("id" = String, Path, description = "Record id, `worker:<key>` or bare key"),
    ),
    responses(
        (status = 200, description = "Worker record", body = Worker),
        (status = 404, description = "No worker with this id", body = ApiMessage),
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Worker>> {
    let worker = state
        .workers()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Worker not found"))?;
    Ok(Json(worker))
}

/// POST /worker — create one record
#[utoipa::path(
    post,
    path = "/worker",
    tag = "Workers",
    request_body = WorkerCreate,
    responses(
        (status = 201, description = "Created record including its assigned id", body = Worker),
        (status = 400, description = "Validation or store failure", body = ApiMessage),
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<WorkerCreate>,
) -> AppResult<(StatusCode, Json<Worker>)> {
    let worker = state.workers().create(payload).await?;
    Ok((StatusCode::CREATED, Json(worker)))
}

/// POST /workers — create a batch (all-or-nothing)
#[utoipa::path(
    post,
    path = "/workers",
    tag = "Workers",
    request_body = [WorkerCreate],
    responses(
        (status = 201, description = "Created records, one per input element", body = [Worker]),
        (status = 400, description = "Validation or store failure; nothing was inserted", body = ApiMessage),
    )
)]
pub async fn create_many(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<Vec<WorkerCreate>>,
) -> AppResult<(StatusCode, Json<Vec<Worker>>)> {
    let workers = state.workers().create_many(payload).await?;
    Ok((StatusCode::CREATED, Json(workers)))
}

/// PUT /worker/{id} — merge any subset of fields
#[utoipa::path(
    put,
    path = "/worker/{id}",
    tag = "Workers",
    params(
        ("id" = String, Path, description = "Record id, `worker:<key>` or bare key"),
    ),
    request_body = WorkerUpdate,
    responses(
        (status = 200, description = "Record state after the merge", body = Worker),
        (status = 400, description = "Validation or store failure", body = ApiMessage),
        (status = 404, description = "No worker with this id", body = ApiMessage),
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<WorkerUpdate>,
) -> AppResult<Json<Worker>> {
    let worker = state.workers().update(&id, payload).await?;
    Ok(Json(worker))
}

/// PUT /worker/{id}/updateRMPaid — update the paid amount only
#[utoipa::path(
    put,
    path = "/worker/{id}/updateRMPaid",
    tag = "Workers",
    params(
        ("id" = String, Path, description = "Record id, `worker:<key>` or bare key"),
    ),
    request_body = RmPaidUpdate,
    responses(
        (status = 200, description = "Record state after the update", body = Worker),
        (status = 400, description = "Validation or store failure", body = ApiMessage),
        (status = 404, description = "No worker with this id", body = ApiMessage),
    )
)]
pub async fn update_rm_paid(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<RmPaidUpdate>,
) -> AppResult<Json<Worker>> {
    let worker = state.workers().update_rm_paid(&id, payload).await?;
    Ok(Json(worker))
}

/// DELETE /worker/{id} — delete one record
#[utoipa::path(
    delete,
    path = "/worker/{id}",
    tag = "Workers",
    params(
        ("id" = String, Path, description = "Record id, `worker:<key>` or bare key"),
    ),
    responses(
        (status = 200, description = "Snapshot of the deleted record", body = Worker),
        (status = 404, description = "No worker with this id", body = ApiMessage),
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Worker>> {
    let worker = state
        .workers()
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Worker not found"))?;
    Ok(Json(worker))
}

/// DELETE /workers — unconditionally delete every record
#[utoipa::path(
    delete,
    path = "/workers",
    tag = "Workers",
    responses(
        (status = 200, description = "Deletion confirmation", body = ApiMessage),
    )
)]
pub async fn delete_all(State(state): State<ServerState>) -> AppResult<Json<ApiMessage>> {
    let count = state.workers().delete_all().await?;
    tracing::info!(count, "All workers deleted");
    Ok(Json(ApiMessage::new("All workers deleted")))
}
