pub mod accounts;
pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod orders;
pub mod users;
pub mod utils;
