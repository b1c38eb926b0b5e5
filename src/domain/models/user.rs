use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type UserId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub date_of_birth: NaiveDate,
}
