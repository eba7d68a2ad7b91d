//! PostgreSQL store tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p lovenotes-server -- --ignored

use lovenotes_server::db::repos::DbError;
use lovenotes_server::db::{create_pool, schema};
use lovenotes_server::models::{CreatePredictionRequest, NewPrediction, NoteText};
use lovenotes_server::store::{NoteStore, PgNoteStore, PgPredictionStore, PredictionStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::PgPool;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    create_pool(&url).await.expect("pool creation failed")
}

#[tokio::test]
#[ignore = "requires database"]
async fn schema_creation_is_idempotent() {
    let pool = pool().await;
    schema::create_notes_table(&pool).await.unwrap();
    schema::create_notes_table(&pool).await.unwrap();
    schema::create_predictions_table(&pool).await.unwrap();
    schema::create_predictions_table(&pool).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn note_roundtrip() {
    let pool = pool().await;
    schema::create_notes_table(&pool).await.unwrap();
    let store = PgNoteStore::new(pool);

    let note = store
        .insert(NoteText::new("  pg note  ").unwrap())
        .await
        .unwrap();
    assert_eq!(note.text, "pg note");
    assert!(note.created_at.is_some());

    let listed = store.list().await.unwrap();
    assert!(listed.iter().any(|n| n == &note));

    store.delete(note.id.into()).await.unwrap();
    let listed = store.list().await.unwrap();
    assert!(!listed.iter().any(|n| n.id == note.id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_missing_note_is_not_found() {
    let pool = pool().await;
    schema::create_notes_table(&pool).await.unwrap();
    let store = PgNoteStore::new(pool);

    let err = store.delete(-1).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "Note", .. }));
}

#[tokio::test]
#[ignore = "requires database"]
async fn prediction_roundtrip() {
    let pool = pool().await;
    schema::create_predictions_table(&pool).await.unwrap();
    let store = PgPredictionStore::new(pool);

    let req = CreatePredictionRequest {
        boy_name: "Al".into(),
        boy_age: 20,
        boy_dob: "2004-01-01".into(),
        girl_name: "Bo".into(),
        girl_age: 20,
        girl_dob: "2004-02-02".into(),
    };
    let new = NewPrediction::score(req, &mut StdRng::seed_from_u64(7));
    let saved = store.insert(new.clone()).await.unwrap();
    assert_eq!(saved.prediction_score, new.prediction_score);
    assert_eq!(saved.girl_dob, "2004-02-02");
    assert!(saved.created_at.is_some());

    store.delete(saved.id.into()).await.unwrap();
    let err = store.delete(saved.id.into()).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "Prediction", .. }));
}

#[tokio::test]
#[ignore = "requires database"]
async fn id_beyond_serial_range_is_not_found() {
    let pool = pool().await;
    schema::create_notes_table(&pool).await.unwrap();
    schema::create_predictions_table(&pool).await.unwrap();

    let err = PgNoteStore::new(pool.clone())
        .delete(99_999_999_999)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "Note", .. }));

    let err = PgPredictionStore::new(pool)
        .delete(i64::from(i32::MIN) - 1)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "Prediction", .. }));
}
