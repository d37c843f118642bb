use crate::accounts::repository::AccountRepository;
use crate::accounts::repository::memory_account_repository::MemoryAccountRepository;

pub async fn create_account_repository() -> Box<dyn AccountRepository> {
    Box::new(MemoryAccountRepository::new())
}
