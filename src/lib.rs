//! Card collection tracking with a small search query language.
//!
//! The query engine lives in [`search_query`]; [`search::Collection`] ties it
//! to a loaded [`cards::CardStore`] and the user's [`owned::OwnedCards`].

pub mod cards;
pub mod config;
pub mod errors;
pub mod owned;
pub mod search;
pub mod search_query;
pub mod storage;

#[cfg(test)]
mod tests;
