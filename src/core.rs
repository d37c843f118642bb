pub mod bookstore;
pub mod command;
pub mod domain;
pub mod events;
pub mod repository;
