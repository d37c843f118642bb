use async_trait::async_trait;
use crate::core::bookstore::BookstoreError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<BookstoreError> for CommandError {
    fn from(other: BookstoreError) -> Self {
        match other {
            BookstoreError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            BookstoreError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            BookstoreError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            BookstoreError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            BookstoreError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            BookstoreError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::bookstore::BookstoreError;
    use crate::core::command::CommandError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::Database { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Other { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_convert_bookstore_error() {
        assert!(matches!(CommandError::from(BookstoreError::duplicate_key("test")),
                         CommandError::DuplicateKey { message: _ }));
        assert!(matches!(CommandError::from(BookstoreError::not_found("test")),
                         CommandError::NotFound { message: _ }));
        assert!(matches!(CommandError::from(BookstoreError::runtime("test", None)),
                         CommandError::Runtime { message: _, reason_code: _, retryable: true }));
    }
}
