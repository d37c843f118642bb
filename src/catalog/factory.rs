use crate::books;
use crate::catalog::domain::BookService;
use crate::catalog::domain::service::BookServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::orders;

// factory method to create book-service for the catalog
pub async fn create_book_service(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn BookService> {
    let book_repo = books::factory::create_book_repository().await;
    let order_repo = orders::factory::create_order_repository().await;
    let publisher = create_publisher(via).await;
    Box::new(BookServiceImpl::new(config, book_repo, order_repo, publisher))
}
