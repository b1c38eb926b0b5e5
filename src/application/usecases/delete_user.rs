use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{usecases::log_failure, validation::parse_user_id},
    domain::{errors::DomainError, repositories::UserRepository},
};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "users.delete", skip(self))]
    pub async fn execute(&self, raw_id: &str) -> Result<(), DomainError> {
        self.delete(raw_id)
            .await
            .inspect_err(|err| log_failure("delete user", err))
    }

    async fn delete(&self, raw_id: &str) -> Result<(), DomainError> {
        let id = parse_user_id(raw_id)?;
        self.repo.delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
