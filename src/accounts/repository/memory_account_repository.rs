use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use tokio::sync::RwLock;

use crate::accounts::domain::model::AccountEntity;
use crate::accounts::repository::AccountRepository;
use crate::core::bookstore::{BookstoreError, BookstoreResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::paging;

lazy_static! {
    // process-wide store so separately constructed repositories share one database
    static ref ACCOUNTS: Arc<RwLock<HashMap<String, AccountEntity>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

#[derive(Debug)]
pub struct MemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, AccountEntity>>>,
}

impl MemoryAccountRepository {
    pub(crate) fn new() -> Self {
        Self {
            accounts: ACCOUNTS.clone(),
        }
    }
}

#[async_trait]
impl Repository<AccountEntity> for MemoryAccountRepository {
    async fn create(&self, entity: &AccountEntity) -> BookstoreResult<usize> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(entity.account_id.as_str()) {
            return Err(BookstoreError::duplicate_key(
                format!("account already exists for {}", entity.account_id).as_str()));
        }
        // usernames act as a unique index
        if accounts.values().any(|account| account.username == entity.username) {
            return Err(BookstoreError::duplicate_key(
                format!("account already exists for username {}", entity.username).as_str()));
        }
        accounts.insert(entity.account_id.clone(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &AccountEntity) -> BookstoreResult<usize> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(entity.account_id.as_str()) {
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
                    format!("stale version {} for account {}", existing.version, entity.account_id).as_str(),
                    Some("conflict".to_string())))
            }
            None => {
                Err(BookstoreError::not_found(
                    format!("account not found for {}", entity.account_id).as_str()))
            }
        }
    }

    async fn get(&self, id: &str) -> BookstoreResult<AccountEntity> {
        let accounts = self.accounts.read().await;
        accounts.get(id).cloned().ok_or_else(|| {
            BookstoreError::not_found(format!("account not found for {}", id).as_str())
        })
    }

    async fn delete(&self, id: &str) -> BookstoreResult<usize> {
        let mut accounts = self.accounts.write().await;
        match accounts.remove(id) {
            Some(_) => Ok(1),
            None => Err(BookstoreError::not_found(
                format!("account not found for {}", id).as_str())),
        }
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> BookstoreResult<PaginatedResult<AccountEntity>> {
        let accounts = self.accounts.read().await;
        let mut matched = accounts.values()
            .filter(|account| matches_predicate(account, predicate))
            .cloned()
            .collect::<Vec<AccountEntity>>();
        // stable order so page tokens stay valid across calls
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)
            .then_with(|| a.account_id.cmp(&b.account_id)));
        Ok(paging::to_page(page, page_size, matched))
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn find_by_username(&self, username: &str) -> BookstoreResult<Vec<AccountEntity>> {
        let predicate = HashMap::from([
            ("username".to_string(), username.to_string()),
        ]);
        let res = self.query(&predicate, None, 50).await?;
        Ok(res.records)
    }
}

fn matches_predicate(account: &AccountEntity, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, v)| match k.as_str() {
        "account_id" => account.account_id == *v,
        "username" => account.username == *v,
        "email" => account.email == *v,
        _ => false,
    })
}
