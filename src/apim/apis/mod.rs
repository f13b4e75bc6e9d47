//! API module

mod api;
mod commands;
mod models;

pub use commands::run_list_apis_command;
pub use models::Api;
