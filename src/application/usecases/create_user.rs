use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        services::clock::Clock,
        usecases::log_failure,
        validation::{UserPayload, validate},
        views::UserView,
    },
    domain::{errors::DomainError, repositories::UserRepository, value_objects::date},
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    #[instrument(name = "users.create", skip_all)]
    pub async fn execute(&self, payload: UserPayload) -> Result<UserView, DomainError> {
        self.create(payload)
            .await
            .inspect_err(|err| log_failure("create user", err))
    }

    async fn create(&self, payload: UserPayload) -> Result<UserView, DomainError> {
        let payload = validate(payload)?;
        let date_of_birth = date::parse(&payload.date_of_birth)?;

        let user = self.repo.create(&payload.name, date_of_birth).await?;
        info!(user_id = user.id, "User created");

        Ok(UserView::assemble(user, self.clock.today()))
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::application::usecases::testing::{BACKEND_DETAIL, FailingRepository, clock, repo};

    fn payload(name: &str, dob: &str) -> UserPayload {
        UserPayload {
            name: Some(name.to_string()),
            date_of_birth: Some(dob.to_string()),
        }
    }

    #[tokio::test]
    async fn creates_user_with_derived_age() {
        let usecase = CreateUserUseCase::new(repo(), clock());

        let view = usecase.execute(payload("Alice", "1990-05-10")).await.unwrap();

        assert_eq!(view.id, 1);
        assert_eq!(view.name, "Alice");
        assert_eq!(view.date_of_birth, "1990-05-10");
        assert_eq!(view.age, 34);
    }

    #[tokio::test]
    async fn two_character_name_is_accepted() {
        let usecase = CreateUserUseCase::new(repo(), clock());
        assert!(usecase.execute(payload("Al", "1990-05-10")).await.is_ok());
    }

    #[tokio::test]
    async fn validation_failure_never_reaches_the_store() {
        let store = repo();
        let usecase = CreateUserUseCase::new(store.clone(), clock());

        let err = usecase.execute(payload("A", "1990-05-10")).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    #[traced_test]
    async fn logs_rejected_payloads() {
        let usecase = CreateUserUseCase::new(repo(), clock());
        let _ = usecase.execute(payload("Alice", "1990-13-01")).await;
        assert!(logs_contain("Failed to create user"));
    }

    #[tokio::test]
    #[traced_test]
    async fn store_failure_is_logged_as_error() {
        let usecase = CreateUserUseCase::new(Arc::new(FailingRepository::always()), clock());

        let err = usecase.execute(payload("Alice", "1990-05-10")).await.unwrap_err();

        assert!(matches!(err, DomainError::Store(_)));
        assert!(logs_contain("ERROR"));
        assert!(logs_contain("Failed to create user"));
        assert!(logs_contain(BACKEND_DETAIL));
    }

    #[tokio::test]
    #[traced_test]
    async fn rejected_payload_is_logged_as_warning() {
        let usecase = CreateUserUseCase::new(repo(), clock());
        let _ = usecase.execute(payload("A", "1990-05-10")).await;
        assert!(logs_contain("WARN"));
        assert!(!logs_contain("ERROR"));
    }
}
