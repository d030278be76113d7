use std::fmt;

use crate::cards::{Card, CardStore};
use crate::owned::OwnedCards;
use crate::search_query::{self, CardIndex};

/// Loaded cards together with the user's ownership table.
#[derive(Debug, Default)]
pub struct Collection {
    pub store: CardStore,
    pub owned: OwnedCards,
}

impl CardIndex for Collection {
    fn is_known_set(&self, code: &str) -> bool {
        self.store.is_known_set(code)
    }

    fn is_owned(&self, card: &Card) -> bool {
        self.owned.is_owned(card)
    }
}

impl Collection {
    pub fn new(store: CardStore, owned: OwnedCards) -> Self {
        Self { store, owned }
    }

    /// Filter the collection with a query. With `owned_only`, cards the
    /// user is missing are dropped from the result as well.
    pub fn search(&self, query: &str, owned_only: bool) -> Vec<&Card> {
        let query = query.trim().to_lowercase();
        let conditions = search_query::parse_query(&query);

        let found: Vec<&Card> = self
            .store
            .all()
            .into_iter()
            .filter(|card| search_query::matches_all(card, &conditions, self))
            .filter(|card| !owned_only || self.owned.is_owned(card))
            .collect();

        log::debug!("search {query:?} matched {} of {} card(s)", found.len(), self.store.len());
        found
    }

    /// Owned counter for the cards currently shown.
    pub fn owned_summary(&self, visible: &[&Card], query: &str) -> OwnedSummary {
        OwnedSummary {
            searching: !query.trim().is_empty(),
            owned_visible: visible.iter().filter(|c| self.owned.is_owned(c)).count(),
            visible: visible.len(),
            owned_total: self.owned.len(),
            total: self.store.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnedSummary {
    pub searching: bool,
    pub owned_visible: usize,
    pub visible: usize,
    pub owned_total: usize,
    pub total: usize,
}

impl fmt::Display for OwnedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.searching {
            write!(
                f,
                "Owned: {}/{} shown ({} total)",
                self.owned_visible, self.visible, self.owned_total
            )
        } else {
            write!(f, "Owned: {}/{}", self.owned_total, self.total)
        }
    }
}
