//! Card search query language.
//!
//! ```text
//! t:creature and (c:w or c:u)
//! !t:land,artifact            -> (!t:land and !t:artifact)
//! o:"draw a card" d:2015-2018 -> two roots, both must hold
//! ```
//!
//! Prefixes: `t:` type line, `o:` oracle text, `c:`/`c=` exact colors,
//! `c<` within colors, `c>` at least colors, `s:` set, `d:` release year,
//! `r:` rarity, `is:owned`. Anything else is a card name substring.
//! A leading `!` negates a filter.

mod eval;
mod lexer;
mod parser;

pub use eval::{evaluate_condition, matches_all, CardIndex, Predicate};
pub use parser::Condition;

use crate::cards::Card;

/// Parse a query into its top-level conditions.
///
/// Never fails: empty input gives an empty list, malformed input
/// (unbalanced parens, stray operators) gives a best-effort tree.
/// The caller is expected to trim and lowercase the query.
pub fn parse_query(input: &str) -> Vec<Condition> {
    let tokens = lexer::tokenize(input);
    let conditions = parser::parse(tokens);
    log::debug!("query {input:?} parsed into {} condition(s)", conditions.len());
    conditions
}

/// Convenience: parse + evaluate in one call.
pub fn matches(query: &str, card: &Card, index: &impl CardIndex) -> bool {
    matches_all(card, &parse_query(query), index)
}
