use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::bookstore::BookStatus;
use crate::utils::date::serializer;

// BookDto is a data transfer object for the book catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: Decimal,
    pub book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(title: &str, author: &str, genre: &str, price: Decimal) -> BookDto {
        BookDto {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            price,
            book_status: BookStatus::Available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() &&
            !self.author.trim().is_empty() &&
            !self.genre.trim().is_empty()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::books::domain::Book;
    use crate::books::dto::BookDto;
    use crate::core::bookstore::BookStatus;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("title", "author", "genre", Decimal::new(1099, 2));
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!("genre", book.genre.as_str());
        assert_eq!(BookStatus::Available, book.status());
    }

    #[tokio::test]
    async fn test_should_check_complete_books() {
        let book = BookDto::new("title", "author", "genre", Decimal::new(1099, 2));
        assert!(book.is_complete());

        let missing = BookDto::new("", "", "", Decimal::ZERO);
        assert!(!missing.is_complete());

        let blank_author = BookDto::new("title", "  ", "genre", Decimal::new(1099, 2));
        assert!(!blank_author.is_complete());
    }
}
