use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the catalog listing at the root path.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handlers::titles::list_titles))
}
