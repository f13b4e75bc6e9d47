//! API Manager client module
//!
//! This module provides functionality to list resources from an API Manager
//! publisher endpoint.

pub mod apis;
mod client;
mod credentials;
pub mod traits;

pub use apis::{run_list_apis_command, Api};
pub use client::ApimClient;
pub use credentials::TokenResolver;
pub use traits::{ListEnvelope, ListingResult};
