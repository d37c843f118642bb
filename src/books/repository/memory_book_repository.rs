use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::bookstore::{BookstoreError, BookstoreResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::paging;
use crate::utils::text::matches_keyword;

lazy_static! {
    // process-wide store so separately constructed repositories share one database
    static ref BOOKS: Arc<RwLock<HashMap<String, BookEntity>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

#[derive(Debug)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<HashMap<String, BookEntity>>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: BOOKS.clone(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> BookstoreResult<usize> {
        let mut books = self.books.write().await;
        if books.contains_key(entity.book_id.as_str()) {
            return Err(BookstoreError::duplicate_key(
                format!("book already exists for {}", entity.book_id).as_str()));
        }
        books.insert(entity.book_id.clone(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> BookstoreResult<usize> {
        let mut books = self.books.write().await;
        match books.get_mut(entity.book_id.as_str()) {
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
                    format!("stale version {} for book {}", existing.version, entity.book_id).as_str(),
                    Some("conflict".to_string())))
            }
            None => {
                Err(BookstoreError::not_found(
                    format!("book not found for {}", entity.book_id).as_str()))
            }
        }
    }

    async fn get(&self, id: &str) -> BookstoreResult<BookEntity> {
        let books = self.books.read().await;
        books.get(id).cloned().ok_or_else(|| {
            BookstoreError::not_found(format!("book not found for {}", id).as_str())
        })
    }

    async fn delete(&self, id: &str) -> BookstoreResult<usize> {
        let mut books = self.books.write().await;
        match books.remove(id) {
            Some(_) => Ok(1),
            None => Err(BookstoreError::not_found(
                format!("book not found for {}", id).as_str())),
        }
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> BookstoreResult<PaginatedResult<BookEntity>> {
        let books = self.books.read().await;
        let mut matched = books.values()
            .filter(|book| matches_predicate(book, predicate))
            .cloned()
            .collect::<Vec<BookEntity>>();
        // stable order so page tokens stay valid across calls
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)
            .then_with(|| a.book_id.cmp(&b.book_id)));
        Ok(paging::to_page(page, page_size, matched))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_keyword(&self, keyword: &str,
                             page: Option<&str>, page_size: usize) -> BookstoreResult<PaginatedResult<BookEntity>> {
        let predicate = HashMap::from([
            ("title:contains".to_string(), keyword.to_string()),
        ]);
        self.query(&predicate, page, page_size).await
    }
}

// predicate keys may carry an operator suffix such as title:contains, bare keys match exactly
fn matches_predicate(book: &BookEntity, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, v)| match k.as_str() {
        "book_id" => book.book_id == *v,
        "title" => book.title == *v,
        "title:contains" => matches_keyword(book.title.as_str(), v.as_str()),
        "author" => book.author == *v,
        "genre" => book.genre == *v,
        "book_status" => book.book_status.to_string() == *v,
        _ => false,
    })
}
