use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::{
        services::clock::Clock,
        usecases::{
            create_user::CreateUserUseCase, delete_user::DeleteUserUseCase,
            get_user::GetUserUseCase, list_users::ListUsersUseCase,
            update_user::UpdateUserUseCase,
        },
    },
    domain::repositories::UserRepository,
};

#[derive(Clone)]
pub struct ApiState {
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub update_user_usecase: Arc<UpdateUserUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
    pub list_users_usecase: Arc<ListUsersUseCase>,
}

impl ApiState {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            create_user_usecase: Arc::new(CreateUserUseCase::new(repo.clone(), clock.clone())),
            get_user_usecase: Arc::new(GetUserUseCase::new(repo.clone(), clock.clone())),
            update_user_usecase: Arc::new(UpdateUserUseCase::new(repo.clone(), clock.clone())),
            delete_user_usecase: Arc::new(DeleteUserUseCase::new(repo.clone())),
            list_users_usecase: Arc::new(ListUsersUseCase::new(repo, clock)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
}
