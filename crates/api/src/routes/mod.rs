pub mod health;
pub mod ship;

use axum::Router;

use crate::state::AppState;

/// Build the `/rest` route tree.
///
/// ```text
/// /ships                 list, create
/// /ships/count           count
/// /ships/{id}            get, update (POST or PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/ships", ship::router())
}
