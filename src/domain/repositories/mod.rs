use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{
    errors::StoreError,
    models::{User, UserId},
};

/// Persistence contract for users. Ids are assigned by the store and never reused.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, name: &str, date_of_birth: NaiveDate) -> Result<User, StoreError>;

    async fn get(&self, id: UserId) -> Result<User, StoreError>;

    /// Replaces both fields of an existing user.
    async fn update(
        &self,
        id: UserId,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<User, StoreError>;

    async fn delete(&self, id: UserId) -> Result<(), StoreError>;

    /// Users ordered by id ascending. An offset past the end yields an empty vec.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}
