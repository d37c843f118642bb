use crate::core::domain::Identifiable;
use crate::core::bookstore::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn is_complete(&self) -> bool;
    fn status(&self) -> BookStatus;
}
