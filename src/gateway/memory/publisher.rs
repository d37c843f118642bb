use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::events::DomainEvent;
use crate::core::bookstore::BookstoreError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher retains published events so embedding apps and tests can
// inspect what the domain services emitted
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    topics: HashMap<String, String>,
    events: Arc<RwLock<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self {
            topics: HashMap::new(),
            events: Arc::new(RwLock::new(vec![])),
        }
    }

    pub async fn published(&self) -> Vec<DomainEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn create_topic(&mut self, topic: &str) -> Result<String, BookstoreError> {
        self.topics.insert(topic.to_string(), topic.to_string());
        Ok(topic.to_string())
    }

    async fn get_topics(&mut self) -> Result<Vec<String>, BookstoreError> {
        Ok(self.topics.values().cloned().collect())
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), BookstoreError> {
        let mut events = self.events.write().await;
        events.push(event.clone());
        Ok(())
    }
}
