//! Environment management CLI arguments

use clap::{Parser, Subcommand};

/// Env subcommands for managing API Manager environments
#[derive(Subcommand, Debug)]
pub enum EnvAction {
    /// List configured environments
    #[command(visible_alias = "ls")]
    List,

    /// Add or replace an environment
    Add(AddEnvArgs),

    /// Remove an environment
    #[command(visible_alias = "rm")]
    Remove(EnvNameArgs),

    /// Set the current environment
    Use(EnvNameArgs),
}

/// Arguments for 'env add' subcommand
///
/// The global `--token` flag supplies the token stored with the environment.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        apictl env add dev --apim https://localhost:9443\n  \
        apictl env add prod --apim https://apim.corp.com --token <TOKEN>\n  \
        apictl env add mock --apim http://localhost:8080 --api-list-endpoint http://localhost:8080/apis")]
pub struct AddEnvArgs {
    /// Environment name
    pub name: String,
    /// API Manager base URL
    #[arg(long)]
    pub apim: String,
    /// APIs listing endpoint (default: <APIM>/api/am/publisher/v1/apis)
    #[arg(long)]
    pub api_list_endpoint: Option<String>,
}

/// Arguments for 'env remove' and 'env use' subcommands
#[derive(Parser, Debug)]
pub struct EnvNameArgs {
    /// Environment name
    pub name: String,
}
