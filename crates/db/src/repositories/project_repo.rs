//! Repository for the `projects` table.

use sqlx::PgPool;
use techvolt_core::project::DEFAULT_STATUS;
use techvolt_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image_path, date, capacity, location, category, \
     start_date, end_date, panel_count, status, benefits, is_active, created_at, updated_at";

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `status` defaults to `"Tamamlandı"` and `is_active` to `true` when
    /// omitted from the input.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, image_path, date, capacity, location,
                 category, start_date, end_date, panel_count, status, benefits, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, $12), $13,
                 COALESCE($14, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.date.into_inner())
            .bind(&input.capacity)
            .bind(&input.location)
            .bind(&input.category)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(input.panel_count)
            .bind(&input.status)
            .bind(DEFAULT_STATUS)
            .bind(&input.benefits)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID, regardless of visibility.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List publicly visible projects, most recent project date first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE is_active = TRUE ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List every project including inactive ones, most recent project date first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_path = COALESCE($4, image_path),
                date = COALESCE($5, date),
                capacity = COALESCE($6, capacity),
                location = COALESCE($7, location),
                category = COALESCE($8, category),
                start_date = COALESCE($9, start_date),
                end_date = COALESCE($10, end_date),
                panel_count = COALESCE($11, panel_count),
                status = COALESCE($12, status),
                benefits = COALESCE($13, benefits),
                is_active = COALESCE($14, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.date.map(|d| d.into_inner()))
            .bind(&input.capacity)
            .bind(&input.location)
            .bind(&input.category)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(input.panel_count)
            .bind(&input.status)
            .bind(&input.benefits)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
