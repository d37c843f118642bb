use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::users::dto::UserDto;
use crate::core::command::{Command, CommandError};
use crate::users::domain::UserService;

pub struct GetUserCommand {
    user_service: Box<dyn UserService>,
}

impl GetUserCommand {
    pub fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetUserCommandRequest {
    pub username: String,
}

impl GetUserCommandRequest {
    pub fn new(username: String) -> Self {
        Self {
            username,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetUserCommandResponse {
    pub user: Option<UserDto>,
}

impl GetUserCommandResponse {
    pub fn new(user: Option<UserDto>) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<GetUserCommandRequest, GetUserCommandResponse> for GetUserCommand {
    async fn execute(&self, req: GetUserCommandRequest) -> Result<GetUserCommandResponse, CommandError> {
        self.user_service.find_user_by_username(req.username.as_str())
            .await.map_err(CommandError::from).map(GetUserCommandResponse::new)
    }
}
