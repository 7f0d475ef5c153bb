//! Route definitions for the `/contact` inbox.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /                  -> create (public)
/// GET    /                  -> list
/// GET    /unread-count      -> unread_count
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// PATCH  /{id}/read         -> mark_as_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        .route("/unread-count", get(contact::unread_count))
        .route(
            "/{id}",
            get(contact::get_by_id)
                .patch(contact::update)
                .delete(contact::delete),
        )
        .route("/{id}/read", patch(contact::mark_as_read))
}
