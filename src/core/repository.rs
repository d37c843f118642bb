use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::bookstore::{BookstoreResult, PaginatedResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> BookstoreResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> BookstoreResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> BookstoreResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> BookstoreResult<usize>;

    // find entities matching predicate
    async fn query(&self, predicate: &HashMap::<String, String>,
                   page: Option<&str>, page_size: usize) -> BookstoreResult<PaginatedResult<Entity>>;
}
