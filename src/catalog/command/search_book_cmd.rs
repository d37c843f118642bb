use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::BookService;
use crate::core::command::{Command, CommandError};

pub struct SearchBookCommand {
    book_service: Box<dyn BookService>,
}

impl SearchBookCommand {
    pub fn new(book_service: Box<dyn BookService>) -> Self {
        Self {
            book_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBookCommandRequest {
    pub keyword: String,
}

impl SearchBookCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBookCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBookCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBookCommandRequest, SearchBookCommandResponse> for SearchBookCommand {
    async fn execute(&self, req: SearchBookCommandRequest) -> Result<SearchBookCommandResponse, CommandError> {
        self.book_service.search_book(req.keyword.as_str())
            .await.map_err(CommandError::from).map(SearchBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use rust_decimal::Decimal;
    use uuid::Uuid;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::search_book_cmd::{SearchBookCommand, SearchBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    lazy_static! {
        static ref ADD_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_book_service(&Configuration::new("test"), GatewayPublisherVia::Logs).await;
                AddBookCommand::new(svc)
            });
        static ref SEARCH_CMD : AsyncOnce<SearchBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_book_service(&Configuration::new("test"), GatewayPublisherVia::Logs).await;
                SearchBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_search_book() {
        let add_cmd = ADD_CMD.get().await.clone();
        let search_cmd = SEARCH_CMD.get().await.clone();

        let title = format!("Book One {}", Uuid::new_v4());
        let book = BookDto::new(title.as_str(), "test author", "test genre", Decimal::new(1099, 2));
        let res = add_cmd.execute(AddBookCommandRequest::new(
            book.title.as_str(), book.author.as_str(), book.genre.as_str(), book.price))
            .await.expect("should add book");
        let found = search_cmd.execute(SearchBookCommandRequest::new(title.as_str()))
            .await.expect("should search book");
        assert_eq!(1, found.books.len());
        assert_eq!(res.book.book_id, found.books[0].book_id);
    }

    #[tokio::test]
    async fn test_should_run_search_book_with_unknown_keyword() {
        let search_cmd = SEARCH_CMD.get().await.clone();

        let found = search_cmd.execute(SearchBookCommandRequest::new(
            format!("missing {}", Uuid::new_v4()).as_str())).await.expect("should handle unknown keyword");
        assert_eq!(0, found.books.len());
    }
}
