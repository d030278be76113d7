use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the card collection.
    ///
    /// Example: binder search 't:creature and c:w,u and !r:common'
    Search {
        /// Query, e.g. `t:creature and (c:w or c:u)`
        query: String,

        /// Card catalog JSON. Overrides `catalog_path` from config.
        #[clap(long)]
        catalog: Option<String>,

        /// Owned card id list. Overrides `owned_path` from config.
        #[clap(long)]
        owned: Option<String>,

        /// Only show owned cards
        #[clap(short = 'o', long, default_value = "false", conflicts_with = "all")]
        owned_only: bool,

        /// Show missing cards too, even when `owned_only` is set in config
        #[clap(short = 'a', long, default_value = "false")]
        all: bool,

        /// Print the count
        #[clap(short = 'c', long, default_value = "false")]
        count: bool,

        /// Print matching cards as JSON
        #[clap(long, default_value = "false")]
        json: bool,
    },

    /// Print the parsed condition tree as JSON
    Parse {
        /// Query to parse
        query: String,
    },

    /// Flip ownership of the given card ids
    Toggle {
        /// Card ids
        #[clap(required = true)]
        ids: Vec<String>,

        /// Owned card id list. Overrides `owned_path` from config.
        #[clap(long)]
        owned: Option<String>,
    },
}

/// `--owned-only` / `--all` as an override of the configured default.
pub fn owned_only_override(owned_only: bool, all: bool) -> Option<bool> {
    match (owned_only, all) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn search_flags(argv: &[&str]) -> Option<bool> {
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Command::Search { owned_only, all, .. } => owned_only_override(owned_only, all),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_owned_only_flags_override_config() {
        assert_eq!(search_flags(&["binder", "search", "t:creature"]), None);
        assert_eq!(search_flags(&["binder", "search", "-o", "t:creature"]), Some(true));
        assert_eq!(search_flags(&["binder", "search", "--all", "t:creature"]), Some(false));
    }

    #[test]
    fn test_owned_only_conflicts_with_all() {
        assert!(Args::try_parse_from(["binder", "search", "-o", "-a", "x"]).is_err());
    }
}
