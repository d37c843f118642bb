use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::users::User;
use crate::utils::date::serializer;


// UserDto abstracts a registered bookstore customer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub user_id: String,
    pub version: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl UserDto {
    pub fn new(username: &str, password: &str, email: &str) -> Self {
        Self {
            user_id: Uuid::new_v4().to_string(),
            version: 0,
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for UserDto {
    fn id(&self) -> String {
        self.user_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl User for UserDto {
    fn is_complete(&self) -> bool {
        self.has_username() &&
            !self.password.trim().is_empty() &&
            !self.email.trim().is_empty()
    }

    fn has_username(&self) -> bool {
        !self.username.trim().is_empty()
    }
}
