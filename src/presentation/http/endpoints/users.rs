use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use crate::{
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{client_message, map_page, map_user},
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::{
            CreateUserResponse, DeleteUserResponse, GetUserResponse, ListUsersResponse,
            UpdateUserResponse,
        },
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, request: Json<CreateUserRequestDto>) -> CreateUserResponse {
        const FAILURE: &str = "Failed to create user";

        match self.state.create_user_usecase.execute(request.0.into()).await {
            Ok(view) => CreateUserResponse::Created(Json(map_user(view))),
            Err(err @ DomainError::Store(_)) => {
                CreateUserResponse::InternalError(client_message(&err, FAILURE))
            }
            Err(err) => CreateUserResponse::BadRequest(client_message(&err, FAILURE)),
        }
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> GetUserResponse {
        const FAILURE: &str = "Failed to get user";

        match self.state.get_user_usecase.execute(&id.0).await {
            Ok(view) => GetUserResponse::Ok(Json(map_user(view))),
            Err(err @ DomainError::NotFound(_)) => {
                GetUserResponse::NotFound(client_message(&err, FAILURE))
            }
            Err(err @ DomainError::Store(_)) => {
                GetUserResponse::InternalError(client_message(&err, FAILURE))
            }
            Err(err) => GetUserResponse::BadRequest(client_message(&err, FAILURE)),
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<String>,
        request: Json<UpdateUserRequestDto>,
    ) -> UpdateUserResponse {
        const FAILURE: &str = "Failed to update user";

        match self
            .state
            .update_user_usecase
            .execute(&id.0, request.0.into())
            .await
        {
            Ok(view) => UpdateUserResponse::Ok(Json(map_user(view))),
            Err(err @ DomainError::NotFound(_)) => {
                UpdateUserResponse::NotFound(client_message(&err, FAILURE))
            }
            Err(err @ DomainError::Store(_)) => {
                UpdateUserResponse::InternalError(client_message(&err, FAILURE))
            }
            Err(err) => UpdateUserResponse::BadRequest(client_message(&err, FAILURE)),
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<String>) -> DeleteUserResponse {
        const FAILURE: &str = "Failed to delete user";

        match self.state.delete_user_usecase.execute(&id.0).await {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err @ DomainError::NotFound(_)) => {
                DeleteUserResponse::NotFound(client_message(&err, FAILURE))
            }
            Err(err @ DomainError::Store(_)) => {
                DeleteUserResponse::InternalError(client_message(&err, FAILURE))
            }
            Err(err) => DeleteUserResponse::BadRequest(client_message(&err, FAILURE)),
        }
    }

    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(
        &self,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
    ) -> ListUsersResponse {
        match self
            .state
            .list_users_usecase
            .execute(page.0.as_deref(), limit.0.as_deref())
            .await
        {
            Ok(page) => ListUsersResponse::Ok(Json(map_page(page))),
            Err(err) => {
                ListUsersResponse::InternalError(client_message(&err, "Failed to list users"))
            }
        }
    }
}
