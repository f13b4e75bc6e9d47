//! Environment management module
//!
//! Provides named environments that bundle an API Manager URL, an optional
//! listing endpoint and an optional token.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_env_command;
pub use models::{Environment, EnvironmentConfig};
pub use resolve::{
    find_environment, resolve_environment, resolve_environment_name, ResolvedEnvironment,
};
pub use store::EnvironmentStore;
