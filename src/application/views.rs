use chrono::NaiveDate;

use crate::{
    application::services::age::calculate_age,
    domain::{
        models::{User, UserId},
        value_objects::date,
    },
};

/// A stored user as presented to callers, with its derived age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub date_of_birth: String,
    pub age: i32,
}

impl UserView {
    pub fn assemble(user: User, today: NaiveDate) -> Self {
        Self {
            id: user.id,
            age: calculate_age(user.date_of_birth, today),
            date_of_birth: date::format(user.date_of_birth),
            name: user.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersPage {
    pub users: Vec<UserView>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
