use poem_openapi::{ApiResponse, Object, payload::Json};

use crate::presentation::http::mappers::error_body;

#[derive(Object, Debug)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub dob: String,
    pub age: i32,
}

#[derive(Object, Debug)]
pub struct UsersPageDto {
    pub users: Vec<UserDto>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

#[derive(Object, Debug)]
pub struct ErrorDto {
    pub error: String,
}

pub const INVALID_BODY: &str = "Invalid request body";

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

fn create_bad_request(_: poem::Error) -> CreateUserResponse {
    CreateUserResponse::BadRequest(error_body(INVALID_BODY))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_bad_request")]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

fn get_bad_request(err: poem::Error) -> GetUserResponse {
    GetUserResponse::BadRequest(error_body(err.to_string()))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

fn update_bad_request(_: poem::Error) -> UpdateUserResponse {
    UpdateUserResponse::BadRequest(error_body(INVALID_BODY))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_bad_request")]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

fn delete_bad_request(err: poem::Error) -> DeleteUserResponse {
    DeleteUserResponse::BadRequest(error_body(err.to_string()))
}

#[derive(ApiResponse)]
pub enum ListUsersResponse {
    #[oai(status = 200)]
    Ok(Json<UsersPageDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}
