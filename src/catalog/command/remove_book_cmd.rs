use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::BookService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    book_service: Box<dyn BookService>,
}

impl RemoveBookCommand {
    pub fn new(book_service: Box<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.book_service.remove_book(req.book_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use rust_decimal::Decimal;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    lazy_static! {
        static ref ADD_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_book_service(&Configuration::new("test"), GatewayPublisherVia::Logs).await;
                AddBookCommand::new(svc)
            });
        static ref REMOVE_CMD : AsyncOnce<RemoveBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_book_service(&Configuration::new("test"), GatewayPublisherVia::Logs).await;
                RemoveBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let add_cmd = ADD_CMD.get().await.clone();
        let remove_cmd = REMOVE_CMD.get().await.clone();

        let book = BookDto::new("test book", "test author", "test genre", Decimal::new(1099, 2));
        let res = add_cmd.execute(AddBookCommandRequest::new(
            book.title.as_str(), book.author.as_str(), book.genre.as_str(), book.price))
            .await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(res.book.book_id))
            .await.expect("should remove book");
    }

}
