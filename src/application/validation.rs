use crate::domain::{errors::DomainError, models::UserId, value_objects::date};

pub const MIN_NAME_LENGTH: usize = 2;

/// Raw create/update payload as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct UserPayload {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
}

/// A payload that passed [`validate`]; both fields are present and well formed.
#[derive(Debug, Clone)]
pub struct ValidUserPayload {
    pub name: String,
    pub date_of_birth: String,
}

pub fn validate(payload: UserPayload) -> Result<ValidUserPayload, DomainError> {
    let name = match payload.name {
        Some(name) if name.chars().count() >= MIN_NAME_LENGTH => name,
        Some(_) => {
            return Err(DomainError::Validation(format!(
                "name must be at least {MIN_NAME_LENGTH} characters long"
            )));
        }
        None => return Err(DomainError::Validation("name is required".to_string())),
    };

    let date_of_birth = match payload.date_of_birth {
        Some(dob) if date::is_well_formed(&dob) => dob,
        Some(_) => {
            return Err(DomainError::Validation(
                "dob must be a valid date in YYYY-MM-DD format".to_string(),
            ));
        }
        None => return Err(DomainError::Validation("dob is required".to_string())),
    };

    Ok(ValidUserPayload {
        name,
        date_of_birth,
    })
}

/// Path identifiers must be positive integers.
pub fn parse_user_id(raw: &str) -> Result<UserId, DomainError> {
    match raw.parse::<UserId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::InvalidId(raw.to_string())),
    }
}
