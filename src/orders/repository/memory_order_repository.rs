use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::core::bookstore::{BookstoreError, BookstoreResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::orders::domain::model::OrderEntity;
use crate::orders::repository::OrderRepository;
use crate::utils::paging;

lazy_static! {
    // process-wide store so separately constructed repositories share one database
    static ref ORDERS: Arc<RwLock<HashMap<String, OrderEntity>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

#[derive(Debug)]
pub struct MemoryOrderRepository {
    orders: Arc<RwLock<HashMap<String, OrderEntity>>>,
}

impl MemoryOrderRepository {
    pub(crate) fn new() -> Self {
        Self {
            orders: ORDERS.clone(),
        }
    }
}

#[async_trait]
impl Repository<OrderEntity> for MemoryOrderRepository {
    async fn create(&self, entity: &OrderEntity) -> BookstoreResult<usize> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(entity.order_id.as_str()) {
            return Err(BookstoreError::duplicate_key(
                format!("order already exists for {}", entity.order_id).as_str()));
        }
        orders.insert(entity.order_id.clone(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &OrderEntity) -> BookstoreResult<usize> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(entity.order_id.as_str()) {
            Some(existing) if existing.version == entity.version => {
                let mut updated = entity.clone();
                updated.version = entity.version + 1;
                updated.created_at = existing.created_at;
                updated.updated_at = Utc::now().naive_utc();
                *existing = updated;
                Ok(1)
            }
            Some(existing) => {
                Err(BookstoreError::validation(
                    format!("stale version {} for order {}", existing.version, entity.order_id).as_str(),
                    Some("conflict".to_string())))
            }
            None => {
                Err(BookstoreError::not_found(
                    format!("order not found for {}", entity.order_id).as_str()))
            }
        }
    }

    async fn get(&self, id: &str) -> BookstoreResult<OrderEntity> {
        let orders = self.orders.read().await;
        orders.get(id).cloned().ok_or_else(|| {
            BookstoreError::not_found(format!("order not found for {}", id).as_str())
        })
    }

    async fn delete(&self, id: &str) -> BookstoreResult<usize> {
        let mut orders = self.orders.write().await;
        match orders.remove(id) {
            Some(_) => Ok(1),
            None => Err(BookstoreError::not_found(
                format!("order not found for {}", id).as_str())),
        }
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> BookstoreResult<PaginatedResult<OrderEntity>> {
        let orders = self.orders.read().await;
        let mut matched = orders.values()
            .filter(|order| matches_predicate(order, predicate))
            .cloned()
            .collect::<Vec<OrderEntity>>();
        // stable order so page tokens stay valid across calls
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)
            .then_with(|| a.order_id.cmp(&b.order_id)));
        Ok(paging::to_page(page, page_size, matched))
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn find_by_user_id(&self, user_id: &str,
                             page: Option<&str>, page_size: usize) -> BookstoreResult<PaginatedResult<OrderEntity>> {
        let predicate = HashMap::from([
            ("user_id".to_string(), user_id.to_string()),
        ]);
        self.query(&predicate, page, page_size).await
    }
}

fn matches_predicate(order: &OrderEntity, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, v)| match k.as_str() {
        "order_id" => order.order_id == *v,
        "store_id" => order.store_id == *v,
        "book_id" => order.book_id == *v,
        "user_id" => order.user_id == *v,
        "order_status" => order.order_status.to_string() == *v,
        "confirmation_code" => order.confirmation_code == *v,
        _ => false,
    })
}
