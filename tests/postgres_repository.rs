#![cfg(feature = "integration")]

//! Runs against a live Postgres pointed to by `DATABASE_URL`.
//! `cargo test --features integration`

use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;

use users_api::domain::{errors::StoreError, repositories::UserRepository};
use users_api::infrastructure::repositories::{PgPool, PostgresUserRepository};

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("failed to connect to Postgres");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");
    sqlx::query("TRUNCATE users")
        .execute(&pool)
        .await
        .expect("failed to truncate users");
    pool
}

fn dob(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// One test so the TRUNCATE in `pool` never races another test.
#[tokio::test]
async fn store_contract() {
    let pool = pool().await;
    let repo = PostgresUserRepository::new(pool.clone());

    crud_lifecycle(repo.as_ref()).await;

    sqlx::query("TRUNCATE users").execute(&pool).await.unwrap();
    list_and_count(repo.as_ref()).await;
}

async fn crud_lifecycle(repo: &dyn UserRepository) {
    let created = repo.create("Alice", dob(1990, 5, 10)).await.unwrap();
    assert_eq!(repo.get(created.id).await.unwrap(), created);

    let updated = repo.update(created.id, "Alicia", dob(1991, 1, 2)).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.date_of_birth, dob(1991, 1, 2));

    repo.delete(created.id).await.unwrap();
    assert!(matches!(repo.delete(created.id).await, Err(StoreError::NotFound(_))));
    assert!(matches!(repo.get(created.id).await, Err(StoreError::NotFound(_))));
    assert!(matches!(
        repo.update(created.id, "Ghost", dob(1990, 1, 1)).await,
        Err(StoreError::NotFound(_))
    ));

    let next = repo.create("Bob", dob(1985, 3, 3)).await.unwrap();
    assert!(next.id > created.id);
}

async fn list_and_count(repo: &dyn UserRepository) {
    for name in ["Ann", "Ben", "Cid"] {
        repo.create(name, dob(2000, 1, 1)).await.unwrap();
    }

    let first = repo.list(2, 0).await.unwrap();
    assert_eq!(first.len(), 2);
    assert!(first[0].id < first[1].id);
    assert_eq!(repo.list(2, 2).await.unwrap().len(), 1);
    assert!(repo.list(2, 50).await.unwrap().is_empty());
    assert_eq!(repo.count().await.unwrap(), 3);
}
