pub mod change_password;
pub mod list_memes;
pub mod log_in;
pub mod log_out;
pub mod sign_up;
pub mod types;
