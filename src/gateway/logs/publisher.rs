use std::collections::HashMap;
use async_trait::async_trait;
use tracing::log::info;
use crate::core::events::DomainEvent;
use crate::core::bookstore::BookstoreError;
use crate::gateway::events::EventPublisher;

// LogPublisher emits domain events to the structured log stream so that
// downstream processors can ingest them from log aggregation
#[derive(Debug, Default)]
pub struct LogPublisher {
    topics: HashMap<String, String>,
}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {
            topics: HashMap::new(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn create_topic(&mut self, topic: &str) -> Result<String, BookstoreError> {
        self.topics.insert(topic.to_string(), topic.to_string());
        info!("Created topic: {}", topic);
        Ok(topic.to_string())
    }

    async fn get_topics(&mut self) -> Result<Vec<String>, BookstoreError> {
        Ok(self.topics.values().cloned().collect())
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), BookstoreError> {
        let json = serde_json::to_string(event)?;
        info!("Published {} event for {}: {}", event.name, event.key, json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::{factory, GatewayPublisherVia};

    #[tokio::test]
    async fn test_should_publish_to_logs() {
        let data = HashMap::from([("title", "Book One")]);
        let event = DomainEvent::added("books", "book-1", &HashMap::new(), &data).expect("build event");
        let mut publisher = factory::create_publisher(GatewayPublisherVia::Logs).await;
        let topic = publisher.create_topic(event.group.as_str()).await.expect("should create topic");
        let _ = publisher.publish(&event).await.expect("should publish");
        let topics = publisher.get_topics().await.expect("should get topics");
        assert!(topics.contains(&topic));
    }
}
