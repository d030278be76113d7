use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Parser;
use homedir::my_home;
use tracing_subscriber::EnvFilter;

use binder::cards::CardStore;
use binder::config::Config;
use binder::owned::OwnedCards;
use binder::search::Collection;
use binder::search_query;
use binder::storage::BackendLocal;

mod cli;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn get_base_path() -> anyhow::Result<PathBuf> {
    if let Ok(base_path) = std::env::var("BINDER_BASE_PATH") {
        return Ok(PathBuf::from(base_path));
    }

    let home = my_home()
        .map_err(|e| anyhow!("could not determine home directory: {e:?}"))?
        .context("home directory path is empty")?;
    Ok(home.join(".local/share/binder"))
}

/// Split an owned-list path into its directory backend and file name.
fn owned_storage(path: &Path) -> anyhow::Result<(BackendLocal, String)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid owned list path {}", path.display()))?
        .to_string();
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let storage = BackendLocal::new(dir)
        .with_context(|| format!("failed to open directory {}", dir.display()))?;
    Ok((storage, file_name))
}

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    init_logging();

    match args.command {
        cli::Command::Parse { query } => {
            let conditions = search_query::parse_query(&query.trim().to_lowercase());
            println!("{}", serde_json::to_string_pretty(&conditions)?);
            Ok(())
        }

        cli::Command::Search {
            query,
            catalog,
            owned,
            owned_only,
            all,
            count,
            json,
        } => {
            let config = Config::load_with(get_base_path()?).context("failed to load config")?;

            let catalog_path = catalog
                .map(PathBuf::from)
                .unwrap_or_else(|| config.resolve(&config.catalog_path));
            let store = CardStore::load_catalog(&catalog_path)
                .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;

            let owned_path = owned
                .map(PathBuf::from)
                .unwrap_or_else(|| config.resolve(&config.owned_path));
            let (storage, ident) = owned_storage(&owned_path)?;
            let owned = OwnedCards::load(&storage, &ident)
                .with_context(|| format!("failed to load owned list {}", owned_path.display()))?;

            let collection = Collection::new(store, owned);
            let owned_only =
                cli::owned_only_override(owned_only, all).unwrap_or(config.owned_only);
            let found = collection.search(&query, owned_only);

            if count {
                println!("{} cards found", found.len());
                return Ok(());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
                return Ok(());
            }

            for card in &found {
                let mark = if collection.owned.is_owned(card) { "*" } else { " " };
                println!(
                    "{mark} {:<40} {:<6} {:<10} {}",
                    card.name,
                    card.set,
                    card.rarity,
                    card.released_at
                );
            }
            println!();
            println!("{}", collection.owned_summary(&found, &query));
            Ok(())
        }

        cli::Command::Toggle { ids, owned } => {
            let config = Config::load_with(get_base_path()?).context("failed to load config")?;

            let owned_path = owned
                .map(PathBuf::from)
                .unwrap_or_else(|| config.resolve(&config.owned_path));
            let (storage, ident) = owned_storage(&owned_path)?;
            let mut owned = OwnedCards::load(&storage, &ident)
                .with_context(|| format!("failed to load owned list {}", owned_path.display()))?;

            for id in &ids {
                let now_owned = owned.toggle(id);
                println!("{id}: {}", if now_owned { "owned" } else { "missing" });
            }

            owned
                .save(&storage, &ident)
                .with_context(|| format!("failed to save owned list {}", owned_path.display()))?;
            Ok(())
        }
    }
}
