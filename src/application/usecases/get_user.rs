use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{
        services::clock::Clock, usecases::log_failure, validation::parse_user_id,
        views::UserView,
    },
    domain::{errors::DomainError, repositories::UserRepository},
};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    #[instrument(name = "users.get", skip(self))]
    pub async fn execute(&self, raw_id: &str) -> Result<UserView, DomainError> {
        self.get(raw_id)
            .await
            .inspect_err(|err| log_failure("get user", err))
    }

    async fn get(&self, raw_id: &str) -> Result<UserView, DomainError> {
        let id = parse_user_id(raw_id)?;
        let user = self.repo.get(id).await?;
        debug!(user_id = id, "User loaded");
        Ok(UserView::assemble(user, self.clock.today()))
    }
}
