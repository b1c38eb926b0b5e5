use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};

use crate::domain::{
    errors::StoreError,
    models::{User, UserId},
    repositories::UserRepository,
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, name: &str, date_of_birth: NaiveDate) -> Result<User, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, dob)
            VALUES ($1, $2)
            RETURNING id, name, dob
            "#,
        )
        .bind(name)
        .bind(date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;
        Ok(record.into())
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, dob FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        record.map(User::from).ok_or(StoreError::NotFound(id))
    }

    async fn update(
        &self,
        id: UserId,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<User, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET name = $2,
                dob = $3
            WHERE id = $1
            RETURNING id, name, dob
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(date_of_birth)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        record.map(User::from).ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, dob
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(&self.pool)
            .await
            .map_err(backend)
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.into())
}

#[derive(FromRow)]
struct UserRecord {
    id: i32,
    name: String,
    dob: NaiveDate,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            date_of_birth: value.dob,
        }
    }
}
