use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::dto::BookDto;
use crate::core::bookstore::OrderStatus;
use crate::core::domain::Identifiable;
use crate::orders::domain::model::confirmation_code;
use crate::users::dto::UserDto;
use crate::utils::date::{serializer};


// OrderDto abstracts a purchase of a catalog book by a registered user.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OrderDto {
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

impl OrderDto {
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

    pub fn from_user_book(store_id: &str, user: &UserDto, book: &BookDto) -> Self {
        OrderDto {
            order_id: Uuid::new_v4().to_string(),
            version: 0,
            store_id: store_id.to_string(),
            book_id: book.id(),
            user_id: user.id(),
            order_status: OrderStatus::Completed,
            price: book.price,
            confirmation_code: confirmation_code(),
            ordered_at: Utc::now().naive_utc(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for OrderDto {
    fn id(&self) -> String {
        self.order_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}


#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::books::dto::BookDto;
    use crate::core::bookstore::OrderStatus;
    use crate::orders::dto::OrderDto;
    use crate::users::dto::UserDto;

    #[tokio::test]
    async fn test_should_build_order() {
        let order = OrderDto::new("book1", "user1", Decimal::new(1099, 2));
        assert_eq!("book1", order.book_id.as_str());
        assert_eq!("user1", order.user_id.as_str());
        assert_eq!(OrderStatus::Completed, order.order_status);
    }

    #[tokio::test]
    async fn test_should_build_order_from_user_book() {
        let user = UserDto::new("userOne", "pass123", "user1@example.com");
        let book = BookDto::new("Book One", "Author One", "Genre One", Decimal::new(1099, 2));
        let order = OrderDto::from_user_book("store1", &user, &book);
        assert_eq!("store1", order.store_id.as_str());
        assert_eq!(user.user_id, order.user_id);
        assert_eq!(book.book_id, order.book_id);
        assert_eq!(book.price, order.price);
    }
}
