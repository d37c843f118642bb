pub mod service;

use async_trait::async_trait;
use crate::core::bookstore::BookstoreResult;
use crate::users::dto::UserDto;

#[async_trait]
pub trait UserService: Sync + Send {
    async fn register_user(&self, user: &UserDto) -> BookstoreResult<bool>;
    async fn login_user(&self, username: &str, password: &str) -> BookstoreResult<Option<UserDto>>;
    async fn find_user_by_username(&self, username: &str) -> BookstoreResult<Option<UserDto>>;
    async fn remove_user(&self, username: &str) -> BookstoreResult<()>;
}
