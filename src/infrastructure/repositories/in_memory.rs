use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{
    errors::StoreError,
    models::{User, UserId},
    repositories::UserRepository,
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    last_id: UserId,
}

#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, name: &str, date_of_birth: NaiveDate) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("user id sequence exhausted"))?;
        table.last_id = id;

        let user = User {
            id,
            name: name.to_string(),
            date_of_birth,
        };
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn update(
        &self,
        id: UserId,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        let user = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        user.name = name.to_string();
        user.date_of_birth = date_of_birth;
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, StoreError> {
        let table = self.table.read().await;
        let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(table.rows.values().skip(skip).take(take).cloned().collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.len() as i64)
    }
}
