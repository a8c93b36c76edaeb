//! API documentation
//!
//! OpenAPI 3 description generated from the handler annotations, served
//! interactively at `/api-docs` with the raw spec at
//! `/api-docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::models::{RmPaidUpdate, Worker, WorkerCreate, WorkerUpdate};
use crate::utils::ApiMessage;

/// OpenAPI documentation for the worker roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Worker Roster API",
        version = env!("CARGO_PKG_VERSION"),
        description = "CRUD API for migrant-labor roster records backed by an embedded document store."
    ),
    paths(
        crate::api::health::root,
        crate::api::health::health,
        crate::api::workers::handler::list,
        crate::api::workers::handler::get_by_id,
        crate::api::workers::handler::create,
        crate::api::workers::handler::create_many,
        crate::api::workers::handler::update,
        crate::api::workers::handler::update_rm_paid,
        crate::api::workers::handler::delete,
        crate::api::workers::handler::delete_all,
    ),
    components(
        schemas(Worker, WorkerCreate, WorkerUpdate, RmPaidUpdate, ApiMessage)
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Workers", description = "Worker roster operations"),
    ),
)]
pub struct ApiDoc;

/// Swagger UI router serving the interactive docs and the raw spec.
pub fn router() -> Router {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
