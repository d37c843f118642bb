use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType tags the kind of data change an event describes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

impl Display for DomainEventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DomainEventType::Added => write!(f, "added"),
            DomainEventType::Updated => write!(f, "updated"),
            DomainEventType::Deleted => write!(f, "deleted"),
        }
    }
}

// DomainEvent records a catalog or order mutation for downstream consumers,
// the changed record travels as a JSON payload and the event name is derived
// from the group and the kind (e.g. books_added)
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(group: &str, key: &str, metadata: &HashMap<String, String>,
                               payload: &T) -> serde_json::Result<Self> {
        Self::build(group, key, DomainEventType::Added, metadata, payload)
    }

    pub fn updated<T: Serialize>(group: &str, key: &str, metadata: &HashMap<String, String>,
                                 payload: &T) -> serde_json::Result<Self> {
        Self::build(group, key, DomainEventType::Updated, metadata, payload)
    }

    pub fn deleted<T: Serialize>(group: &str, key: &str, metadata: &HashMap<String, String>,
                                 payload: &T) -> serde_json::Result<Self> {
        Self::build(group, key, DomainEventType::Deleted, metadata, payload)
    }

    // decode the JSON payload back into its source type
    pub fn payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.json_data.as_str())
    }

    fn build<T: Serialize>(group: &str, key: &str, kind: DomainEventType,
                           metadata: &HashMap<String, String>,
                           payload: &T) -> serde_json::Result<Self> {
        Ok(Self {
            event_id: Uuid::new_v4().to_string(),
            name: format!("{}_{}", group, kind),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: serde_json::to_string(payload)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}
