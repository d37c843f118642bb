pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::bookstore::{BookstoreResult, PaginatedResult};
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn find_by_keyword(&self, keyword: &str,
                             page: Option<&str>, page_size: usize) -> BookstoreResult<PaginatedResult<BookEntity>>;
}
