//! API command handlers

use log::{debug, info};

use crate::apim::{ApimClient, TokenResolver};
use crate::cli::{Cli, ListArgs};
use crate::environment::{resolve_environment, EnvironmentStore};
use crate::output::output_apis;
use crate::ui::{create_spinner, finish_spinner};

/// Run the `list apis` command
pub async fn run_list_apis_command(
    cli: &Cli,
    args: &ListArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let store = EnvironmentStore::new();
    let resolved = resolve_environment(&store, args.environment.as_deref(), cli.batch)?;

    let token = TokenResolver::new(&resolved.name).resolve(
        cli.token.as_deref(),
        resolved.environment.token.as_deref(),
    )?;
    let client = ApimClient::with_options(token, cli.insecure)?;
    let endpoint = resolved.environment.listing_endpoint();

    debug!(
        "Listing APIs in '{}' (query={:?}, format={:?})",
        resolved.name, args.query, args.format
    );

    let spinner = create_spinner(
        &format!("Fetching APIs from '{}'...", resolved.name),
        cli.batch,
    );
    let result = client.list_apis(&args.query, &endpoint).await;
    finish_spinner(spinner);
    let listing = result?;

    info!(
        "Found {} APIs (server count {})",
        listing.records.len(),
        listing.count
    );

    output_apis(&listing.records, &args.format, !args.no_align)?;
    Ok(())
}
