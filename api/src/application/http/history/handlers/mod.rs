pub mod add_history;
pub mod get_history;
pub mod get_latest_history;
