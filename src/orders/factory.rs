use crate::orders::repository::OrderRepository;
use crate::orders::repository::memory_order_repository::MemoryOrderRepository;

pub async fn create_order_repository() -> Box<dyn OrderRepository> {
    Box::new(MemoryOrderRepository::new())
}
