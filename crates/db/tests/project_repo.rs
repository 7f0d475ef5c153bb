//! Integration tests for `ProjectRepo` against a real database.
//!
//! - Create / fetch round trip with date coercion and defaults
//! - Active-only public listing and its ordering
//! - Partial updates (including the empty patch)
//! - Hard delete

use chrono::{Datelike, TimeZone, Utc};
use sqlx::PgPool;
use techvolt_db::models::project::{CreateProject, UpdateProject};
use techvolt_db::repositories::ProjectRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, date: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: format!("{title} açıklaması"),
        image_path: format!("/images/{}.jpg", title.to_lowercase()),
        date: date.parse().expect("test date should parse"),
        capacity: "100 kWp".to_string(),
        location: "Ankara".to_string(),
        category: "Ticari".to_string(),
        start_date: "Ocak 2024".to_string(),
        end_date: "Şubat 2024".to_string(),
        panel_count: 220,
        status: None,
        benefits: vec!["Düşük fatura".to_string(), "Temiz enerji".to_string()],
        is_active: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find_returns_same_fields(pool: PgPool) {
    let input = new_project("Konya", "2024-03-15");
    let created = ProjectRepo::create(&pool, &input).await.unwrap();

    let found = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(found.title, input.title);
    assert_eq!(found.description, input.description);
    assert_eq!(found.image_path, input.image_path);
    assert_eq!(found.capacity, input.capacity);
    assert_eq!(found.location, input.location);
    assert_eq!(found.category, input.category);
    assert_eq!(found.start_date, input.start_date);
    assert_eq!(found.end_date, input.end_date);
    assert_eq!(found.panel_count, input.panel_count);
    assert_eq!(found.benefits, input.benefits);
    assert_eq!(
        (found.date.year(), found.date.month(), found.date.day()),
        (2024, 3, 15)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_applies_defaults(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Defaults", "2024-01-01"))
        .await
        .unwrap();
    assert_eq!(created.status, "Tamamlandı");
    assert!(created.is_active);
    assert!(created.updated_at >= created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_keeps_explicit_status_and_inactive_flag(pool: PgPool) {
    let mut input = new_project("Draft", "2024-01-01");
    input.status = Some("Devam Ediyor".to_string());
    input.is_active = Some(false);

    let created = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.status, "Devam Ediyor");
    assert!(!created.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_active_excludes_inactive_and_orders_by_date_desc(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Old", "2022-06-01"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("New", "2024-06-01"))
        .await
        .unwrap();
    let mut hidden = new_project("Hidden", "2025-01-01");
    hidden.is_active = Some(false);
    ProjectRepo::create(&pool, &hidden).await.unwrap();

    let active = ProjectRepo::list_active(&pool).await.unwrap();
    let titles: Vec<&str> = active.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Old"]);
    assert!(active.iter().all(|p| p.is_active));

    let all = ProjectRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title, "Hidden");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivating_hides_from_public_listing(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Toggle", "2024-01-01"))
        .await
        .unwrap();

    let patch = UpdateProject {
        is_active: Some(false),
        ..Default::default()
    };
    ProjectRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("project should exist");

    let active = ProjectRepo::list_active(&pool).await.unwrap();
    assert!(active.iter().all(|p| p.id != created.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_update_changes_nothing_but_updated_at(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Stable", "2024-02-02"))
        .await
        .unwrap();

    let updated = ProjectRepo::update(&pool, created.id, &UpdateProject::default())
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.image_path, created.image_path);
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.capacity, created.capacity);
    assert_eq!(updated.location, created.location);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.start_date, created.start_date);
    assert_eq!(updated.end_date, created.end_date);
    assert_eq!(updated.panel_count, created.panel_count);
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.benefits, created.benefits);
    assert_eq!(updated.is_active, created.is_active);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_with_new_date(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Move", "2024-02-02"))
        .await
        .unwrap();

    let patch = UpdateProject {
        title: Some("Moved".to_string()),
        date: Some("2024-09-10T08:00:00Z".parse().unwrap()),
        benefits: Some(vec!["Tek fayda".to_string()]),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.title, "Moved");
    assert_eq!(updated.date, Utc.with_ymd_and_hms(2024, 9, 10, 8, 0, 0).unwrap());
    assert_eq!(updated.benefits, vec!["Tek fayda".to_string()]);
    assert_eq!(updated.location, created.location);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, 999_999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_find_is_none(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("Gone", "2024-01-01"))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());

    // Second delete finds nothing.
    assert!(!ProjectRepo::delete(&pool, created.id).await.unwrap());
}
