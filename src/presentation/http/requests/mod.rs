use poem_openapi::Object;

use crate::application::validation::UserPayload;

/// Fields are optional here so that a missing one is reported by validation
/// rather than as an unparseable body.
#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    pub name: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: Option<String>,
}

#[derive(Object, Debug)]
pub struct UpdateUserRequestDto {
    pub name: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: Option<String>,
}

impl From<CreateUserRequestDto> for UserPayload {
    fn from(value: CreateUserRequestDto) -> Self {
        Self {
            name: value.name,
            date_of_birth: value.dob,
        }
    }
}

impl From<UpdateUserRequestDto> for UserPayload {
    fn from(value: UpdateUserRequestDto) -> Self {
        Self {
            name: value.name,
            date_of_birth: value.dob,
        }
    }
}
