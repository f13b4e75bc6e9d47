//! Environment resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;

use crate::config::environment as environment_config;
use crate::error::{ApictlError, Result};

use super::models::{Environment, EnvironmentConfig};
use super::store::EnvironmentStore;

/// An environment picked for one command, with its name
#[derive(Debug, Clone)]
pub struct ResolvedEnvironment {
    pub name: String,
    pub environment: Environment,
}

/// Resolve the active environment name:
/// 1. --environment CLI flag
/// 2. APICTL_ENVIRONMENT env var
/// 3. current-environment from config file
/// 4. the only configured environment
/// 5. interactive selection (error in batch mode)
pub fn resolve_environment_name(
    config: &EnvironmentConfig,
    cli_environment: Option<&str>,
    batch_mode: bool,
) -> Result<String> {
    let from_env = std::env::var(environment_config::ENV_VAR)
        .ok()
        .filter(|name| !name.is_empty());
    select_environment_name(config, cli_environment, from_env, batch_mode)
}

fn select_environment_name(
    config: &EnvironmentConfig,
    cli_environment: Option<&str>,
    env_var: Option<String>,
    batch_mode: bool,
) -> Result<String> {
    if let Some(name) = cli_environment {
        debug!("Using environment from CLI flag: {}", name);
        return Ok(name.to_string());
    }

    if let Some(name) = env_var {
        debug!(
            "Using environment from {} env var: {}",
            environment_config::ENV_VAR,
            name
        );
        return Ok(name);
    }

    if let Some(name) = &config.current_environment {
        debug!("Using current environment from config file: {}", name);
        return Ok(name.clone());
    }

    let names: Vec<String> = config.environments.keys().cloned().collect();
    match names.as_slice() {
        [] => Err(ApictlError::EnvironmentNotFound(
            "No environments configured. Use 'apictl env add <name> --apim <URL>' to create one."
                .to_string(),
        )),
        [only] => {
            debug!("Using the only configured environment: {}", only);
            Ok(only.clone())
        }
        _ if batch_mode => Err(ApictlError::EnvironmentNotFound(format!(
            "Multiple environments configured and none selected. \
             Use --environment, {} or 'apictl env use <name>'. Available: {}",
            environment_config::ENV_VAR,
            config.names()
        ))),
        _ => interactive_environment_selection(&names),
    }
}

fn interactive_environment_selection(names: &[String]) -> Result<String> {
    eprintln!("\nMultiple environments configured:");

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select an environment")
        .items(names)
        .default(0)
        .interact()
        .map_err(|e| {
            ApictlError::EnvironmentNotFound(format!("Failed to select environment: {}", e))
        })?;

    let name = names[selection].clone();
    debug!("User selected environment: {}", name);
    Ok(name)
}

/// Look up a named environment in the config
pub fn find_environment(config: &EnvironmentConfig, name: &str) -> Result<Environment> {
    config.environments.get(name).cloned().ok_or_else(|| {
        ApictlError::EnvironmentNotFound(format!(
            "Environment '{}' not found. Available environments: {}",
            name,
            config.names()
        ))
    })
}

/// Load the config and resolve the environment a command runs against
pub fn resolve_environment(
    store: &EnvironmentStore,
    cli_environment: Option<&str>,
    batch_mode: bool,
) -> Result<ResolvedEnvironment> {
    let config = store.load()?;
    let name = resolve_environment_name(&config, cli_environment, batch_mode)?;
    let environment = find_environment(&config, &name)?;
    debug!("Resolved environment '{}': apim={}", name, environment.apim);
    Ok(ResolvedEnvironment { name, environment })
}
