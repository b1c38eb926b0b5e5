use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{
        services::clock::Clock,
        usecases::log_failure,
        views::{UserView, UsersPage},
    },
    domain::{errors::DomainError, repositories::UserRepository},
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// `page` and `limit` fall back to their defaults when missing or not numeric,
    /// and are raised to 1 when lower. There is no upper bound on `limit`.
    #[instrument(name = "users.list", skip(self))]
    pub async fn execute(
        &self,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Result<UsersPage, DomainError> {
        let page = page_param(page, DEFAULT_PAGE);
        let limit = page_param(limit, DEFAULT_LIMIT);
        self.list(page, limit).await
    }

    async fn list(&self, page: i64, limit: i64) -> Result<UsersPage, DomainError> {
        let offset = (page - 1).saturating_mul(limit);

        // List and count are separate reads; a concurrent write may land between them.
        let users = self
            .repo
            .list(limit, offset)
            .await
            .map_err(DomainError::from)
            .inspect_err(|err| log_failure("list users", err))?;
        let total = self
            .repo
            .count()
            .await
            .map_err(DomainError::from)
            .inspect_err(|err| log_failure("count users", err))?;
        debug!(page, limit, returned = users.len(), total, "Users listed");

        let today = self.clock.today();
        Ok(UsersPage {
            users: users
                .into_iter()
                .map(|user| UserView::assemble(user, today))
                .collect(),
            total,
            page,
            limit,
        })
    }
}

fn page_param(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
        .max(1)
}
