pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod purchase_book_cmd;
pub mod remove_book_cmd;
pub mod search_book_cmd;
