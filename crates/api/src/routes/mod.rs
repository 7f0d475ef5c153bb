pub mod admin;
pub mod contact;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/login                 login (public)
/// /admin/projects              list all projects (admin)
///
/// /projects                    list active (public), create (admin)
/// /projects/{id}               get (public), update, delete (admin)
///
/// /contact                     submit (public), list (admin)
/// /contact/unread-count        unread counter (admin)
/// /contact/{id}                get, update, delete (admin)
/// /contact/{id}/read           mark read (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router())
        .nest("/projects", project::router())
        .nest("/contact", contact::router())
}
