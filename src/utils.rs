pub mod date;
pub mod logs;
pub mod paging;
pub mod text;
