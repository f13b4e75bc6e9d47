//! CLI argument parsing

mod env;
mod list;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use env::{AddEnvArgs, EnvAction, EnvNameArgs};
pub use list::{ListArgs, ListResource};

/// API Manager command line client
#[derive(Parser, Debug)]
#[command(name = "apictl")]
#[command(version)]
#[command(about = "List and render API Manager resources", long_about = None)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, no interactive prompts
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Accept self-signed server certificates
    #[arg(short = 'k', long, global = true, default_value_t = false)]
    pub insecure: bool,

    /// Access token (overrides APICTL_TOKEN and the stored token)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources
    #[command(visible_alias = "ls")]
    List {
        #[command(subcommand)]
        resource: ListResource,
    },

    /// Manage API Manager environments
    Env {
        #[command(subcommand)]
        action: EnvAction,
    },
}
