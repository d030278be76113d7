use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Card as returned by the catalog API. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub color_identity: Vec<String>,

    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub released_at: String,
    #[serde(default)]
    pub rarity: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Prices>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub usd: Option<String>,
    #[serde(default)]
    pub eur: Option<String>,
}

impl Card {
    pub fn type_line(&self) -> &str {
        self.type_line.as_deref().unwrap_or_default()
    }

    pub fn oracle_text(&self) -> &str {
        self.oracle_text.as_deref().unwrap_or_default()
    }

    /// Front face name of a multi-faced card (`"Fire // Ice"` -> `"Fire"`).
    pub fn primary_name(&self) -> &str {
        primary_name(&self.name)
    }

    /// Cards without a `games` list are assumed to be paper printings.
    pub fn is_paper(&self) -> bool {
        self.games.is_empty() || self.games.iter().any(|g| g == "paper")
    }
}

fn primary_name(name: &str) -> &str {
    name.split(" // ").next().unwrap_or(name)
}

/// Catalog payload: either a bare array or a paginated list object.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Cards(Vec<Card>),
    List { data: Vec<Card> },
}

/// Printings grouped by primary name, plus every set code seen so far.
#[derive(Debug, Default)]
pub struct CardStore {
    names: Vec<String>,
    printings: HashMap<String, Vec<Card>>,
    set_codes: HashSet<String>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog JSON file, skipping non-paper printings.
    pub fn load_catalog(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let cards = match serde_json::from_slice::<CatalogFile>(&data)? {
            CatalogFile::Cards(cards) => cards,
            CatalogFile::List { data } => data,
        };

        let mut store = Self::new();
        let mut skipped = 0;
        for card in cards {
            if card.is_paper() {
                store.add(card);
            } else {
                skipped += 1;
            }
        }

        log::info!(
            "loaded {} card(s) from {} ({skipped} non-paper skipped)",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Add a printing. Duplicate ids are ignored; printings under one name
    /// are kept ordered by release date, oldest first.
    pub fn add(&mut self, card: Card) {
        if card.name.is_empty() {
            return;
        }

        if !card.set.is_empty() {
            self.set_codes.insert(card.set.to_lowercase());
        }

        let key = card.primary_name().to_string();
        if !self.printings.contains_key(&key) {
            self.names.push(key.clone());
        }
        let printings = self.printings.entry(key).or_default();

        if printings.iter().any(|p| p.id == card.id) {
            return;
        }
        printings.push(card);
        printings.sort_by(|a, b| a.released_at.cmp(&b.released_at));
    }

    pub fn printings(&self, name: &str) -> &[Card] {
        self.printings
            .get(primary_name(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn oldest_printing(&self, name: &str) -> Option<&Card> {
        self.printings(name).first()
    }

    /// Oldest printing of every name, in the order names were first added.
    pub fn all(&self) -> Vec<&Card> {
        self.names
            .iter()
            .filter_map(|name| self.printings.get(name).and_then(|p| p.first()))
            .collect()
    }

    /// Number of distinct card names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_known_set(&self, code: &str) -> bool {
        self.set_codes.contains(code)
    }

    pub fn known_set_codes(&self) -> &HashSet<String> {
        &self.set_codes
    }

    pub fn clear(&mut self) {
        self.names.clear();
        self.printings.clear();
        self.set_codes.clear();
    }
}
