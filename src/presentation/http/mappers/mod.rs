use poem_openapi::payload::Json;

use crate::{
    application::views::{UserView, UsersPage},
    domain::errors::DomainError,
    presentation::http::responses::{ErrorDto, UserDto, UsersPageDto},
};

pub fn map_user(view: UserView) -> UserDto {
    UserDto {
        id: view.id,
        name: view.name,
        dob: view.date_of_birth,
        age: view.age,
    }
}

pub fn map_page(page: UsersPage) -> UsersPageDto {
    UsersPageDto {
        users: page.users.into_iter().map(map_user).collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
    }
}

pub fn error_body(message: impl Into<String>) -> Json<ErrorDto> {
    Json(ErrorDto {
        error: message.into(),
    })
}

/// Message shown to the caller. Store failures get `fallback` so no backend detail leaks.
pub fn client_message(err: &DomainError, fallback: &str) -> Json<ErrorDto> {
    match err {
        DomainError::InvalidFormat(_) => error_body("Invalid date format, use YYYY-MM-DD"),
        DomainError::InvalidId(_) => error_body("Invalid user ID"),
        DomainError::NotFound(_) => error_body("User not found"),
        DomainError::Validation(message) => error_body(message.as_str()),
        DomainError::Store(_) => error_body(fallback),
    }
}
