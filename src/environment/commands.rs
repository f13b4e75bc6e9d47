//! Environment command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::{AddEnvArgs, EnvAction};
use crate::error::ApictlError;

use super::models::{Environment, EnvironmentConfig};
use super::store::EnvironmentStore;

/// Dispatch environment subcommands
///
/// `token` is the global `--token` flag, stored by `env add`.
pub fn run_env_command(
    action: &EnvAction,
    token: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = EnvironmentStore::new();
    match action {
        EnvAction::List => run_env_list(&store),
        EnvAction::Add(args) => run_env_add(&store, args, token),
        EnvAction::Remove(args) => run_env_remove(&store, &args.name),
        EnvAction::Use(args) => run_env_use(&store, &args.name),
    }
}

fn run_env_list(store: &EnvironmentStore) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load()?;

    if config.environments.is_empty() {
        println!("No environments configured.");
        println!("\nUse 'apictl env add <name> --apim <URL>' to create one.");
        return Ok(());
    }

    println!("{}", environment_table(&config));
    Ok(())
}

fn environment_table(config: &EnvironmentConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("APIM"),
            Cell::new("ENDPOINT"),
            Cell::new("TOKEN"),
        ]);

    for (name, environment) in &config.environments {
        let is_current = config.current_environment.as_deref() == Some(name.as_str());

        table.add_row(vec![
            Cell::new(if is_current { "*" } else { "" }),
            Cell::new(name),
            Cell::new(&environment.apim),
            Cell::new(environment.listing_endpoint()),
            Cell::new(mask_token(environment.token.as_deref())),
        ]);
    }
    table
}

/// Create or replace a named environment
fn run_env_add(
    store: &EnvironmentStore,
    args: &AddEnvArgs,
    token: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;

    let environment = Environment {
        apim: args.apim.clone(),
        api_list_endpoint: args.api_list_endpoint.clone(),
        token: token.map(String::from),
    };
    let replaced = config
        .environments
        .insert(args.name.clone(), environment)
        .is_some();

    // First environment becomes current
    if config.environments.len() == 1 {
        config.current_environment = Some(args.name.clone());
    }

    store.save(&config)?;
    if replaced {
        println!("✓ Updated environment '{}'", args.name);
    } else {
        println!("✓ Added environment '{}'", args.name);
    }
    Ok(())
}

fn run_env_remove(store: &EnvironmentStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;

    if config.environments.remove(name).is_none() {
        return Err(not_found(&config, name).into());
    }

    if config.current_environment.as_deref() == Some(name) {
        config.current_environment = None;
    }

    store.save(&config)?;
    println!("✓ Removed environment '{}'", name);
    Ok(())
}

fn run_env_use(store: &EnvironmentStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;

    if !config.environments.contains_key(name) {
        return Err(not_found(&config, name).into());
    }

    config.current_environment = Some(name.to_string());
    store.save(&config)?;
    println!("✓ Switched to environment '{}'", name);
    Ok(())
}

fn not_found(config: &EnvironmentConfig, name: &str) -> ApictlError {
    ApictlError::EnvironmentNotFound(format!(
        "Environment '{}' not found. Available environments: {}",
        name,
        config.names()
    ))
}

/// Mask a token for display: last 4 chars, or "<not set>"
fn mask_token(token: Option<&str>) -> String {
    match token {
        Some(t) if t.chars().count() >= 4 => {
            let tail: String = t.chars().skip(t.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}
