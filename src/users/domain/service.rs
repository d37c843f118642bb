use async_trait::async_trait;
use tracing::log::warn;
use crate::accounts::domain::model::AccountEntity;
use crate::accounts::repository::AccountRepository;
use crate::core::bookstore::{BookstoreError, BookstoreResult};
use crate::core::domain::Configuration;
use crate::users::domain::UserService;
use crate::users::dto::UserDto;
use crate::users::User;

pub(crate) struct UserServiceImpl {
    account_repository: Box<dyn AccountRepository>,
}

impl UserServiceImpl {
    pub(crate) fn new(_config: &Configuration,
                      account_repository: Box<dyn AccountRepository>) -> Self {
        Self {
            account_repository,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register_user(&self, user: &UserDto) -> BookstoreResult<bool> {
        if !user.has_username() {
            warn!("rejecting registration without username for {}", user.user_id);
            return Ok(false);
        }
        let account = AccountEntity::from(user);
        match self.account_repository.create(&account).await {
            Ok(_) => Ok(true),
            Err(BookstoreError::DuplicateKey { message }) => {
                warn!("rejecting registration for taken username {}: {}", user.username, message);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    async fn login_user(&self, username: &str, password: &str) -> BookstoreResult<Option<UserDto>> {
        let accounts = self.account_repository.find_by_username(username).await?;
        match accounts.first() {
            Some(account) if account.password == password => Ok(Some(UserDto::from(account))),
            Some(_) => {
                warn!("rejecting login with bad password for {}", username);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn find_user_by_username(&self, username: &str) -> BookstoreResult<Option<UserDto>> {
        let accounts = self.account_repository.find_by_username(username).await?;
        Ok(accounts.first().map(UserDto::from))
    }

    async fn remove_user(&self, username: &str) -> BookstoreResult<()> {
        let accounts = self.account_repository.find_by_username(username).await?;
        match accounts.first() {
            Some(account) => {
                let _ = self.account_repository.delete(account.account_id.as_str()).await?;
                Ok(())
            }
            None => Err(BookstoreError::not_found(
                format!("user with username {} not found", username).as_str())),
        }
    }
}

impl From<&UserDto> for AccountEntity {
    fn from(user: &UserDto) -> Self {
        AccountEntity {
            account_id: user.user_id.to_string(),
            version: user.version,
            username: user.username.to_string(),
            password: user.password.to_string(),
            email: user.email.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&AccountEntity> for UserDto {
    fn from(account: &AccountEntity) -> Self {
        UserDto {
            user_id: account.account_id.to_string(),
            version: account.version,
            username: account.username.to_string(),
            password: account.password.to_string(),
            email: account.email.to_string(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use uuid::Uuid;
    use crate::core::bookstore::BookstoreError;
    use crate::core::domain::Configuration;
    use crate::users::domain::UserService;
    use crate::users::dto::UserDto;
    use crate::users::factory;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn UserService>> = AsyncOnce::new(async {
            factory::create_user_service(&Configuration::new("test")).await
        });
    }

    fn build_user(username: &str) -> UserDto {
        UserDto::new(username, "pass123", format!("{}@example.com", username).as_str())
    }

    #[tokio::test]
    async fn test_should_register_user() {
        let svc = SUT_SVC.get().await.clone();
        let user = build_user(format!("userOne_{}", Uuid::new_v4()).as_str());
        let registered = svc.register_user(&user).await.expect("should register user");
        assert!(registered);
        let loaded = svc.find_user_by_username(user.username.as_str()).await
            .expect("should find user").expect("should match user");
        assert_eq!(user.username, loaded.username);
    }

    #[tokio::test]
    async fn test_should_not_register_user_with_taken_username() {
        let svc = SUT_SVC.get().await.clone();
        let user = build_user(format!("userTwo_{}", Uuid::new_v4()).as_str());
        assert!(svc.register_user(&user).await.expect("should register user"));
        let dup = UserDto::new(user.username.as_str(), "other-pass", "other@example.com");
        let registered = svc.register_user(&dup).await.expect("should handle duplicate user");
        assert!(!registered);
    }

    #[tokio::test]
    async fn test_should_not_register_user_without_username() {
        let svc = SUT_SVC.get().await.clone();
        let user = UserDto::new("", "pass123", "nobody@example.com");
        let registered = svc.register_user(&user).await.expect("should handle missing username");
        assert!(!registered);
    }

    #[tokio::test]
    async fn test_should_login_user() {
        let svc = SUT_SVC.get().await.clone();
        let user = build_user(format!("userThree_{}", Uuid::new_v4()).as_str());
        assert!(svc.register_user(&user).await.expect("should register user"));
        let loaded = svc.login_user(user.username.as_str(), user.password.as_str()).await
            .expect("should login user").expect("should match user");
        assert_eq!(user, loaded);
    }

    #[tokio::test]
    async fn test_should_not_login_user_with_bad_password() {
        let svc = SUT_SVC.get().await.clone();
        let user = build_user(format!("userFour_{}", Uuid::new_v4()).as_str());
        assert!(svc.register_user(&user).await.expect("should register user"));
        let loaded = svc.login_user(user.username.as_str(), "bad-pass").await
            .expect("should handle bad password");
        assert_eq!(None, loaded);
    }

    #[tokio::test]
    async fn test_should_not_login_unknown_user() {
        let svc = SUT_SVC.get().await.clone();
        let loaded = svc.login_user(format!("ghost_{}", Uuid::new_v4()).as_str(), "pass123").await
            .expect("should handle unknown user");
        assert_eq!(None, loaded);
    }

    #[tokio::test]
    async fn test_should_remove_user() {
        let svc = SUT_SVC.get().await.clone();
        let user = build_user(format!("userFive_{}", Uuid::new_v4()).as_str());
        assert!(svc.register_user(&user).await.expect("should register user"));
        svc.remove_user(user.username.as_str()).await.expect("should remove user");
        let loaded = svc.find_user_by_username(user.username.as_str()).await
            .expect("should query user");
        assert_eq!(None, loaded);
        let removed = svc.remove_user(user.username.as_str()).await;
        assert!(matches!(removed, Err(BookstoreError::NotFound { .. })));
    }
}
