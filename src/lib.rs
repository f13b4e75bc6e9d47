//! apictl - List and render API Manager resources
//!
//! A CLI tool and library that fetches resource listings from an API Manager
//! publisher endpoint and renders them through user-supplied format strings.
//!
//! # Features
//!
//! - Named environments with stored tokens
//! - Server-side query filtering
//! - Table, plain template and JSON output
//! - Go-style templates: `{{.Name}}`, `{{ json . }}`, `{{ upper .Status }}`
//!
//! # Example
//!
//! ```bash
//! # Register an environment
//! apictl env add dev --apim https://localhost:9443 --token <TOKEN>
//!
//! # List APIs as a table
//! apictl list apis
//!
//! # Filter and pick columns
//! apictl list apis -q name:Pizza --format "table {{.Name}}\t{{.Status}}"
//!
//! # One JSON document per API
//! apictl list apis --format "{{ jsonPretty . }}"
//! ```

pub mod apim;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod output;
pub mod ui;

pub use apim::{run_list_apis_command, Api, ApimClient, ListingResult, TokenResolver};
pub use cli::{Cli, Command, EnvAction, ListArgs, ListResource};
pub use environment::{run_env_command, Environment, EnvironmentConfig, EnvironmentStore};
pub use error::{ApictlError, Result};
pub use output::{
    output_apis, render, write_apis, ApiView, FormatSpec, HeaderMap, RecordView, RenderContext,
};
