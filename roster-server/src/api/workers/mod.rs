//! Worker API module
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /workers | GET | List all |
//! | /workers | POST | Create many (all-or-nothing) |
//! | /workers | DELETE | Delete all |
//! | /worker | POST | Create one |
//! | /worker/{id} | GET | Get by id |
//! | /worker/{id} | PUT | Merge-update fields |
//! | /worker/{id} | DELETE | Delete by id |
//! | /worker/{id}/updateRMPaid | PUT | Update the paid amount only |

pub mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/workers",
            get(handler::list)
                .post(handler::create_many)
                .delete(handler::delete_all),
        )
        .route("/worker", post(handler::create))
        .route(
            "/worker/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/worker/{id}/updateRMPaid", put(handler::update_rm_paid))
}
