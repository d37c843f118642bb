use std::collections::HashMap;
use async_trait::async_trait;
use tracing::log::warn;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::BookService;
use crate::core::bookstore::{BookStatus, BookstoreError, BookstoreResult, PaginatedResult};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;
use crate::orders::domain::model::OrderEntity;
use crate::orders::dto::OrderDto;
use crate::orders::repository::OrderRepository;
use crate::users::dto::UserDto;
use crate::users::User;
use crate::utils::text;

pub(crate) struct BookServiceImpl {
    store_id: String,
    max_search_results: usize,
    max_page_size: usize,
    book_repository: Box<dyn BookRepository>,
    order_repository: Box<dyn OrderRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl BookServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      order_repository: Box<dyn OrderRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            store_id: config.store_id.to_string(),
            max_search_results: config.max_search_results,
            max_page_size: config.max_page_size,
            book_repository,
            order_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn add_book(&self, book: &BookDto) -> BookstoreResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", book.book_id.as_str(), &HashMap::new(), book)?).await?;
        Ok(book.clone())
    }

    async fn remove_book(&self, id: &str) -> BookstoreResult<()> {
        let res = self.book_repository.delete(id).await.map(|_| ())?;
        let data = id.to_string();
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "books", id, &HashMap::new(), &data)?).await?;
        Ok(res)
    }

    async fn update_book(&self, book: &BookDto) -> BookstoreResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "books", book.book_id.as_str(), &HashMap::new(), book)?).await?;
        Ok(book.clone())
    }

    async fn find_book_by_id(&self, id: &str) -> BookstoreResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn search_book(&self, keyword: &str) -> BookstoreResult<Vec<BookDto>> {
        if text::normalize(keyword).is_empty() {
            return Ok(vec![]);
        }
        let res = self.book_repository.find_by_keyword(
            keyword, None, self.max_search_results).await?;
        Ok(res.records.iter().map(BookDto::from).collect())
    }

    // purchase is only recorded when both sides pass the checks, price and
    // status come from the listed catalog row rather than the caller copy
    async fn purchase_book(&self, user: &UserDto, book: &BookDto) -> BookstoreResult<bool> {
        if !user.is_complete() {
            warn!("rejecting purchase of {} for incomplete user {}", book.book_id, user.user_id);
            return Ok(false);
        }
        if !book.is_complete() {
            warn!("rejecting purchase of incomplete book {} for user {}", book.book_id, user.user_id);
            return Ok(false);
        }
        let listed = match self.book_repository.get(book.book_id.as_str()).await {
            Ok(entity) => BookDto::from(&entity),
            Err(BookstoreError::NotFound { .. }) => {
                warn!("rejecting purchase of unlisted book {} for user {}", book.book_id, user.user_id);
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        if listed.status() != BookStatus::Available {
            warn!("rejecting purchase of {} book {} for user {}",
                listed.book_status, listed.book_id, user.user_id);
            return Ok(false);
        }
        let order = OrderDto::from_user_book(self.store_id.as_str(), user, &listed);
        let _ = self.order_repository.create(&OrderEntity::from(&order)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "orders", order.order_id.as_str(), &HashMap::new(), &order)?).await?;
        Ok(true)
    }

    async fn find_purchases_by_user(&self, user_id: &str, page: Option<&str>,
                                    page_size: usize) -> BookstoreResult<PaginatedResult<OrderDto>> {
        let limit = page_size.min(self.max_page_size);
        let res = self.order_repository.find_by_user_id(user_id, page, limit).await?;
        let records = res.records.iter().map(OrderDto::from).collect();
        Ok(PaginatedResult::new(page, limit, res.next_page, records))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            price: other.price,
            book_status: other.book_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            price: other.price,
            book_status: other.book_status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&OrderEntity> for OrderDto {
    fn from(other: &OrderEntity) -> Self {
        Self {
            order_id: other.order_id.to_string(),
            version: other.version,
            store_id: other.store_id.to_string(),
            book_id: other.book_id.to_string(),
            user_id: other.user_id.to_string(),
            order_status: other.order_status,
            price: other.price,
            confirmation_code: other.confirmation_code.to_string(),
            ordered_at: other.ordered_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&OrderDto> for OrderEntity {
    fn from(other: &OrderDto) -> Self {
        Self {
            order_id: other.order_id.to_string(),
            version: other.version,
            store_id: other.store_id.to_string(),
            book_id: other.book_id.to_string(),
            user_id: other.user_id.to_string(),
            order_status: other.order_status,
            price: other.price,
            confirmation_code: other.confirmation_code.to_string(),
            ordered_at: other.ordered_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
