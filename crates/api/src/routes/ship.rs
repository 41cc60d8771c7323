use axum::routing::get;
use axum::Router;

use crate::handlers::ship;
use crate::state::AppState;

/// Routes mounted at `/ships`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /count           -> count
/// GET    /{id}            -> get_by_id
/// POST   /{id}            -> update
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ship::list).post(ship::create))
        .route("/count", get(ship::count))
        .route(
            "/{id}",
            get(ship::get_by_id)
                .post(ship::update)
                .put(ship::update)
                .delete(ship::delete),
        )
}
