use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::users::dto::UserDto;
use crate::core::command::{Command, CommandError};
use crate::users::domain::UserService;

pub struct LoginUserCommand {
    user_service: Box<dyn UserService>,
}

impl LoginUserCommand {
    pub fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginUserCommandRequest {
    pub username: String,
    pub password: String,
}

impl LoginUserCommandRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct LoginUserCommandResponse {
    pub user: Option<UserDto>,
}

impl LoginUserCommandResponse {
    pub fn new(user: Option<UserDto>) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<LoginUserCommandRequest, LoginUserCommandResponse> for LoginUserCommand {
    async fn execute(&self, req: LoginUserCommandRequest) -> Result<LoginUserCommandResponse, CommandError> {
        self.user_service.login_user(req.username.as_str(), req.password.as_str())
            .await.map_err(CommandError::from).map(LoginUserCommandResponse::new)
    }
}
