use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// AccountEntity abstracts a customer account with sign-in credentials and contact email
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AccountEntity {
    pub account_id: String,
    pub version: i64,
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl AccountEntity {
    pub fn new(username: &str, password: &str, email: &str) -> Self {
        Self {
            account_id: Uuid::new_v4().to_string(),
            version: 0,
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for AccountEntity {
    fn id(&self) -> String {
        self.account_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
