//! Handlers for the `/projects` resource.
//!
//! Reads are public; every mutation requires an admin token.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use techvolt_core::project::ENTITY_PROJECT;
use techvolt_db::models::project::{CreateProject, Project, UpdateProject};
use techvolt_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/projects
///
/// Publicly visible projects only, newest project date first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_active(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/admin/projects
///
/// Every project, including inactive ones, for the admin dashboard.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_all(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY_PROJECT, id))?;
    Ok(Json(project))
}

/// POST /api/projects
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        project_id = project.id,
        title = %project.title,
        token_id = %admin.token_id,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /api/projects/{id}
///
/// Applies only the supplied fields.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY_PROJECT, id))?;

    tracing::info!(project_id = id, token_id = %admin.token_id, "Project updated");

    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY_PROJECT, id));
    }

    tracing::info!(project_id = id, token_id = %admin.token_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
