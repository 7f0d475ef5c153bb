//! Integration tests for `ContactMessageRepo` against a real database.

use sqlx::PgPool;
use techvolt_db::models::contact_message::{CreateContactMessage, UpdateContactMessage};
use techvolt_db::repositories::ContactMessageRepo;

fn new_message(name: &str, message: &str) -> CreateContactMessage {
    CreateContactMessage {
        name: name.to_string(),
        email: "a@example.com".to_string(),
        phone: None,
        message: message.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_message_is_unread_and_listed_first(pool: PgPool) {
    ContactMessageRepo::create(&pool, &new_message("Önceki", "İlk mesaj"))
        .await
        .unwrap();

    let created = ContactMessageRepo::create(&pool, &new_message("Ahmet Yılmaz", "Merhaba"))
        .await
        .unwrap();
    assert!(!created.is_read);
    assert_eq!(created.name, "Ahmet Yılmaz");

    let list = ContactMessageRepo::list(&pool).await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, created.id);
    assert_eq!(list[0].message, "Merhaba");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_phone_round_trips(pool: PgPool) {
    let mut input = new_message("Ayşe", "Teklif istiyorum");
    input.phone = Some("+90 555 000 00 00".to_string());

    let created = ContactMessageRepo::create(&pool, &input).await.unwrap();
    let found = ContactMessageRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("message should exist");
    assert_eq!(found.phone.as_deref(), Some("+90 555 000 00 00"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_as_read_is_idempotent(pool: PgPool) {
    let created = ContactMessageRepo::create(&pool, &new_message("Mehmet", "Selam"))
        .await
        .unwrap();
    assert_eq!(ContactMessageRepo::count_unread(&pool).await.unwrap(), 1);

    let first = ContactMessageRepo::mark_as_read(&pool, created.id)
        .await
        .unwrap()
        .expect("message should exist");
    assert!(first.is_read);

    let second = ContactMessageRepo::mark_as_read(&pool, created.id)
        .await
        .unwrap()
        .expect("message should exist");
    assert!(second.is_read);
    assert_eq!(ContactMessageRepo::count_unread(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_sets_is_read_only(pool: PgPool) {
    let created = ContactMessageRepo::create(&pool, &new_message("Zeynep", "Bilgi"))
        .await
        .unwrap();

    let patch = UpdateContactMessage {
        is_read: Some(true),
        ..Default::default()
    };
    let updated = ContactMessageRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("message should exist");

    assert!(updated.is_read);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.message, created.message);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_message_yields_none(pool: PgPool) {
    assert!(ContactMessageRepo::find_by_id(&pool, 424_242)
        .await
        .unwrap()
        .is_none());
    assert!(ContactMessageRepo::mark_as_read(&pool, 424_242)
        .await
        .unwrap()
        .is_none());
    assert!(!ContactMessageRepo::delete(&pool, 424_242).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_message(pool: PgPool) {
    let created = ContactMessageRepo::create(&pool, &new_message("Can", "Sil beni"))
        .await
        .unwrap();
    assert!(ContactMessageRepo::delete(&pool, created.id).await.unwrap());
    assert!(ContactMessageRepo::list(&pool).await.unwrap().is_empty());
}
