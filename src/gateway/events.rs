use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::bookstore::BookstoreError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn create_topic(&mut self, topic: &str) -> Result<String, BookstoreError>;
    async fn get_topics(&mut self) -> Result<Vec<String>, BookstoreError>;
    async fn publish(&self, event: &DomainEvent) -> Result<(), BookstoreError>;
}
