use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum BookstoreError {
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
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl BookstoreError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> BookstoreError {
        BookstoreError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> BookstoreError {
        BookstoreError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> BookstoreError {
        BookstoreError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> BookstoreError {
        BookstoreError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            BookstoreError::Database { retryable, .. } => { *retryable }
            BookstoreError::DuplicateKey { .. } => { false }
            BookstoreError::NotFound { .. } => { false }
            BookstoreError::Validation { .. } => { false }
            BookstoreError::Serialization { .. } => { false }
            BookstoreError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for BookstoreError {
    fn from(err: serde_json::Error) -> Self {
        BookstoreError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for BookstoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookstoreError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            BookstoreError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::NotFound { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            BookstoreError::Serialization { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for bookstore operations.
pub type BookstoreResult<T> = Result<T, BookstoreError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number or token
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}


#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    OutOfStock,
    Discontinued,
    Unknown,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => BookStatus::Available,
            "OutOfStock" => BookStatus::OutOfStock,
            "Discontinued" => BookStatus::Discontinued,
            _ => BookStatus::Unknown,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::OutOfStock => write!(f, "OutOfStock"),
            BookStatus::Discontinued => write!(f, "Discontinued"),
            BookStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    Completed,
    Canceled,
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Placed" => OrderStatus::Placed,
            "Completed" => OrderStatus::Completed,
            "Canceled" => OrderStatus::Canceled,
            _ => OrderStatus::Placed,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OrderStatus::Placed => write!(f, "Placed"),
            OrderStatus::Completed => write!(f, "Completed"),
            OrderStatus::Canceled => write!(f, "Canceled"),
        }
    }
}
