//! Route definitions for `/admin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, project};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /login                             -> login
/// GET    /projects                          -> list_all (including inactive)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/projects", get(project::list_all))
}
