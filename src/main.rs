//! apictl - Main entry point

use clap::Parser;
use log::{debug, info};

use apictl::{run_env_command, run_list_apis_command, Cli, Command, ListResource};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting apictl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "Global flags: batch={}, insecure={}, token={}",
        cli.batch,
        cli.insecure,
        if cli.token.is_some() { "<set>" } else { "<unset>" }
    );

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::List { resource } => match resource {
            ListResource::Apis(args) => run_list_apis_command(cli, args).await,
        },
        Command::Env { action } => run_env_command(action, cli.token.as_deref()),
    }
}
