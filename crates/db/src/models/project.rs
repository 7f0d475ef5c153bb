//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use techvolt_core::dates::{deserialize_optional_date, ProjectDate};
use techvolt_core::types::{DbId, Timestamp};
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub date: Timestamp,
    pub capacity: String,
    pub location: String,
    pub category: String,
    /// Free-text display value, not a parsed date.
    pub start_date: String,
    /// Free-text display value, not a parsed date.
    pub end_date: String,
    pub panel_count: i32,
    pub status: String,
    pub benefits: Vec<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "imagePath must not be empty"))]
    pub image_path: String,
    pub date: ProjectDate,
    pub capacity: String,
    pub location: String,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    #[validate(range(min = 0, message = "panelCount must not be negative"))]
    pub panel_count: i32,
    /// Defaults to `"Tamamlandı"` if omitted.
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: Option<String>,
    pub benefits: Vec<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "imagePath must not be empty"))]
    pub image_path: Option<String>,
    /// A blank string leaves the stored date unchanged.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<ProjectDate>,
    pub capacity: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[validate(range(min = 0, message = "panelCount must not be negative"))]
    pub panel_count: Option<i32>,
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
