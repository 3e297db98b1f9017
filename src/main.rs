use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands, DEFAULT_STORE_DIR, STORE_ENV_VAR};
use services::store::JsonStore;

fn resolve_store_root(cli: &Cli) -> String {
    cli.store
        .clone()
        .or_else(|| std::env::var(STORE_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_STORE_DIR.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = JsonStore::open(resolve_store_root(&cli));

    match &cli.command {
        Commands::Verify {
            collection,
            fields,
            owner,
            owner_match,
            only_inconsistent,
        } => commands::handle_verify(
            cli.json,
            &store,
            collection,
            fields,
            owner.as_deref(),
            owner_match.as_deref(),
            *only_inconsistent,
        )?,
        Commands::Summary {
            collection,
            fields,
            owner,
            owner_match,
        } => commands::handle_summary(
            cli.json,
            &store,
            collection,
            fields,
            owner.as_deref(),
            owner_match.as_deref(),
        )?,
        Commands::Counts => commands::handle_counts(cli.json, &store)?,
        Commands::Peek { collection } => commands::handle_peek(cli.json, &store, collection)?,
        Commands::Export { out } => commands::handle_export(cli.json, out)?,
    }

    Ok(())
}
