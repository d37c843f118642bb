use chrono::{NaiveDateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::bookstore::OrderStatus;
use crate::utils::date::serializer;

// OrderEntity abstracts a purchase of a catalog book by a registered user.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OrderEntity {
    pub order_id: String,
    pub version: i64,
    pub store_id: String,
    pub book_id: String,
    pub user_id: String,
    pub order_status: OrderStatus,
    pub price: Decimal,
    pub confirmation_code: String,
    #[serde(with = "serializer")]
    pub ordered_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl OrderEntity {
    pub fn new(book_id: &str, user_id: &str, price: Decimal) -> Self {
        Self {
            order_id: Uuid::new_v4().to_string(),
            version: 0,
            store_id: Uuid::new_v4().to_string(),
            book_id: book_id.to_string(),
            user_id: user_id.to_string(),
            order_status: OrderStatus::Completed,
            price,
            confirmation_code: confirmation_code(),
            ordered_at: Utc::now().naive_utc(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

pub(crate) fn confirmation_code() -> String {
    format!("{:08}", rand::thread_rng().gen_range(0..100_000_000))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::core::bookstore::OrderStatus;
    use crate::orders::domain::model::OrderEntity;

    #[tokio::test]
    async fn test_should_build_order() {
        let order = OrderEntity::new("book1", "user1", Decimal::new(1099, 2));
        assert_eq!("book1", order.book_id.as_str());
        assert_eq!("user1", order.user_id.as_str());
        assert_eq!(Decimal::new(1099, 2), order.price);
        assert_eq!(OrderStatus::Completed, order.order_status);
        assert_eq!(8, order.confirmation_code.len());
    }
}
