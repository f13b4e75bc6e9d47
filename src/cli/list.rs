//! List command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'list' command
#[derive(Subcommand, Debug)]
pub enum ListResource {
    /// List APIs published in an environment
    #[command(visible_alias = "api")]
    Apis(ListArgs),
}

/// Arguments for 'list apis' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "FORMAT:\n  \
        (empty)   default table: ID, NAME, VERSION, CONTEXT, STATUS, PROVIDER\n  \
        json      JSON array of records\n  \
        table T   table with header row, columns from template T\n  \
        T         one line per record rendered with template T\n\n\
        Template fields: .Id .Name .Context .Version .Provider .Status\n\
        Functions: json, jsonPretty, upper, lower\n\n\
        EXAMPLES:\n  \
        apictl list apis\n  \
        apictl list apis -e prod -q name:Pizza\n  \
        apictl list apis --format \"table {{.Name}}\\t{{.Status}}\"\n  \
        apictl list apis --format \"{{ jsonPretty . }}\"")]
pub struct ListArgs {
    /// Environment to list from (overrides APICTL_ENVIRONMENT and current-environment)
    #[arg(short, long)]
    pub environment: Option<String>,

    /// Server-side search query, e.g. "name:Pizza"
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Output format: empty, "json", "table <template>" or "<template>"
    #[arg(long, default_value = "")]
    pub format: String,

    /// Print table columns tab-separated instead of space-aligned
    #[arg(long, default_value_t = false)]
    pub no_align: bool,
}
