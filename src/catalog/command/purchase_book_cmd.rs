use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::BookService;
use crate::core::command::{Command, CommandError};
use crate::users::dto::UserDto;

pub struct PurchaseBookCommand {
    book_service: Box<dyn BookService>,
}

impl PurchaseBookCommand {
    pub fn new(book_service: Box<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PurchaseBookCommandRequest {
    pub user: UserDto,
    pub book: BookDto,
}

impl PurchaseBookCommandRequest {
    pub fn new(user: UserDto, book: BookDto) -> Self {
        Self {
            user,
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct PurchaseBookCommandResponse {
    pub purchased: bool,
}

impl PurchaseBookCommandResponse {
    pub fn new(purchased: bool) -> Self {
        Self {
            purchased,
        }
    }
}

#[async_trait]
impl Command<PurchaseBookCommandRequest, PurchaseBookCommandResponse> for PurchaseBookCommand {
    async fn execute(&self, req: PurchaseBookCommandRequest) -> Result<PurchaseBookCommandResponse, CommandError> {
        self.book_service.purchase_book(&req.user, &req.book)
            .await.map_err(CommandError::from).map(PurchaseBookCommandResponse::new)
    }
}
