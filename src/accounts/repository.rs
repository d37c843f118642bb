pub mod memory_account_repository;
use async_trait::async_trait;
use crate::accounts::domain::model::AccountEntity;
use crate::core::bookstore::BookstoreResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait AccountRepository: Repository<AccountEntity> {
    async fn find_by_username(&self, username: &str) -> BookstoreResult<Vec<AccountEntity>>;
}
