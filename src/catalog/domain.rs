pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::bookstore::{BookstoreResult, PaginatedResult};
use crate::orders::dto::OrderDto;
use crate::users::dto::UserDto;

#[async_trait]
pub trait BookService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> BookstoreResult<BookDto>;
    async fn remove_book(&self, id: &str) -> BookstoreResult<()>;
    async fn update_book(&self, book: &BookDto) -> BookstoreResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> BookstoreResult<BookDto>;
    async fn search_book(&self, keyword: &str) -> BookstoreResult<Vec<BookDto>>;
    async fn purchase_book(&self, user: &UserDto, book: &BookDto) -> BookstoreResult<bool>;
    async fn find_purchases_by_user(&self, user_id: &str, page: Option<&str>,
                                    page_size: usize) -> BookstoreResult<PaginatedResult<OrderDto>>;
}
