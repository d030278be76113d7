use std::collections::BTreeSet;

use crate::cards::Card;
use crate::errors::AppError;
use crate::storage::StorageManager;

/// Ids of the cards the user owns.
///
/// Persisted as plain text, one id per line. Blank lines and `#` comments
/// are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedCards {
    ids: BTreeSet<String>,
}

impl OwnedCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// A missing file is an empty collection.
    pub fn load(storage: &dyn StorageManager, ident: &str) -> Result<Self, AppError> {
        if !storage.exists(ident) {
            log::debug!("owned list {ident} not found, starting empty");
            return Ok(Self::new());
        }

        let data = storage.read(ident)?;
        let owned: Self = String::from_utf8_lossy(&data).lines().collect();
        log::info!("loaded {} owned card id(s) from {ident}", owned.len());
        Ok(owned)
    }

    pub fn save(&self, storage: &dyn StorageManager, ident: &str) -> Result<(), AppError> {
        let mut out = String::new();
        for id in &self.ids {
            out.push_str(id);
            out.push('\n');
        }
        storage.write(ident, out.as_bytes())?;
        Ok(())
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip ownership of `id`, returning the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn is_owned(&self, card: &Card) -> bool {
        self.ids.contains(&card.id)
    }

    pub fn is_missing(&self, card: &Card) -> bool {
        !self.is_owned(card)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for OwnedCards {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let ids = iter
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { ids }
    }
}
