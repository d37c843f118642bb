use crate::accounts;
use crate::core::domain::Configuration;
use crate::users::domain::service::UserServiceImpl;
use crate::users::domain::UserService;

// factory method to create user-service
pub async fn create_user_service(config: &Configuration) -> Box<dyn UserService> {
    let account_repository = accounts::factory::create_account_repository().await;
    Box::new(UserServiceImpl::new(config, account_repository))
}
