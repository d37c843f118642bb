pub mod memory_order_repository;

use async_trait::async_trait;
use crate::core::bookstore::{BookstoreResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::orders::domain::model::OrderEntity;


#[async_trait]
pub trait OrderRepository: Repository<OrderEntity> {
    async fn find_by_user_id(&self, user_id: &str,
                             page: Option<&str>, page_size: usize) -> BookstoreResult<PaginatedResult<OrderEntity>>;
}
