use crate::core::domain::Identifiable;

pub mod command;
pub mod domain;
pub mod dto;
pub mod factory;

pub trait User: Identifiable {
    fn is_complete(&self) -> bool;
    fn has_username(&self) -> bool;
}
