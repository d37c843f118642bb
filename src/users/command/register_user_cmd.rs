use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::users::dto::UserDto;
use crate::core::command::{Command, CommandError};
use crate::users::domain::UserService;

pub struct RegisterUserCommand {
    user_service: Box<dyn UserService>,
}

impl RegisterUserCommand {
    pub fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserCommandRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl RegisterUserCommandRequest {
    pub fn new(username: &str, password: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        }
    }
    pub fn build_user(&self) -> UserDto {
        UserDto::new(self.username.as_str(), self.password.as_str(), self.email.as_str())
    }
}


#[derive(Debug, Serialize)]
pub struct RegisterUserCommandResponse {
    pub user: UserDto,
    pub registered: bool,
}

impl RegisterUserCommandResponse {
    pub fn new(user: UserDto, registered: bool) -> Self {
        Self {
            user,
            registered,
        }
    }
}

#[async_trait]
impl Command<RegisterUserCommandRequest, RegisterUserCommandResponse> for RegisterUserCommand {
    async fn execute(&self, req: RegisterUserCommandRequest) -> Result<RegisterUserCommandResponse, CommandError> {
        let user = req.build_user();
        self.user_service.register_user(&user).await.map_err(CommandError::from)
            .map(|registered| RegisterUserCommandResponse::new(user, registered))
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use uuid::Uuid;
    use crate::users::command::register_user_cmd::{RegisterUserCommand, RegisterUserCommandRequest};
    use crate::users::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<RegisterUserCommand> = AsyncOnce::new(async {
                let svc = factory::create_user_service(&Configuration::new("test")).await;
                RegisterUserCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_register_user() {
        let cmd = SUT_CMD.get().await.clone();

        let username = format!("reg_user_{}", Uuid::new_v4());
        let res = cmd.execute(RegisterUserCommandRequest::new(
            username.as_str(), "pass123", "reg@example.com")).await.expect("should register user");
        assert!(res.registered);
    }

    #[tokio::test]
    async fn test_should_not_register_user_twice() {
        let cmd = SUT_CMD.get().await.clone();

        let username = format!("reg_twice_{}", Uuid::new_v4());
        let first = cmd.execute(RegisterUserCommandRequest::new(
            username.as_str(), "pass123", "twice@example.com")).await.expect("should register user");
        assert!(first.registered);
        let second = cmd.execute(RegisterUserCommandRequest::new(
            username.as_str(), "pass123", "twice@example.com")).await.expect("should handle duplicate user");
        assert!(!second.registered);
    }
}
