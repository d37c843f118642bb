pub mod get_user_cmd;
pub mod login_user_cmd;
pub mod register_user_cmd;
