use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        services::clock::Clock,
        usecases::log_failure,
        validation::{UserPayload, parse_user_id, validate},
        views::UserView,
    },
    domain::{errors::DomainError, repositories::UserRepository, value_objects::date},
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    #[instrument(name = "users.update", skip(self, payload))]
    pub async fn execute(
        &self,
        raw_id: &str,
        payload: UserPayload,
    ) -> Result<UserView, DomainError> {
        self.update(raw_id, payload)
            .await
            .inspect_err(|err| log_failure("update user", err))
    }

    async fn update(&self, raw_id: &str, payload: UserPayload) -> Result<UserView, DomainError> {
        let id = parse_user_id(raw_id)?;
        let payload = validate(payload)?;
        let date_of_birth = date::parse(&payload.date_of_birth)?;

        let user = self.repo.update(id, &payload.name, date_of_birth).await?;
        info!(user_id = id, "User updated");

        Ok(UserView::assemble(user, self.clock.today()))
    }
}
