pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

use tracing::{error, warn};

use crate::domain::errors::DomainError;

fn log_failure(action: &str, err: &DomainError) {
    if err.is_client_fault() {
        warn!(error = %err, "Failed to {action}");
    } else {
        error!(error = %err, "Failed to {action}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::{
        application::services::clock::{Clock, FixedClock},
        domain::{
            errors::StoreError,
            models::{User, UserId},
            repositories::UserRepository,
        },
        infrastructure::repositories::InMemoryUserRepository,
    };

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    pub fn repo() -> Arc<dyn UserRepository> {
        Arc::new(InMemoryUserRepository::new())
    }

    pub fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(today()))
    }

    pub const BACKEND_DETAIL: &str = "connection refused: postgres://app:hunter2@db";

    /// Store whose calls fail with a backend error. With `count_only`, `list`
    /// succeeds with no rows and only `count` fails.
    pub struct FailingRepository {
        count_only: bool,
    }

    impl FailingRepository {
        pub fn always() -> Self {
            Self { count_only: false }
        }

        pub fn count_only() -> Self {
            Self { count_only: true }
        }
    }

    fn backend<T>() -> Result<T, StoreError> {
        Err(StoreError::Backend(anyhow!(BACKEND_DETAIL)))
    }

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn create(&self, _: &str, _: NaiveDate) -> Result<User, StoreError> {
            backend()
        }

        async fn get(&self, _: UserId) -> Result<User, StoreError> {
            backend()
        }

        async fn update(&self, _: UserId, _: &str, _: NaiveDate) -> Result<User, StoreError> {
            backend()
        }

        async fn delete(&self, _: UserId) -> Result<(), StoreError> {
            backend()
        }

        async fn list(&self, _: i64, _: i64) -> Result<Vec<User>, StoreError> {
            if self.count_only {
                return Ok(Vec::new());
            }
            backend()
        }

        async fn count(&self) -> Result<i64, StoreError> {
            backend()
        }
    }
}
