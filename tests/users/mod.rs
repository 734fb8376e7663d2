mod list_memes;
mod log_in;
