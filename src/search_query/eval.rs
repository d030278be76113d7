use super::parser::Condition;
use crate::cards::Card;

/// Lookups the evaluator needs from the surrounding collection.
pub trait CardIndex {
    /// Whether `code` (lowercase) is a set code seen among loaded cards.
    fn is_known_set(&self, code: &str) -> bool;

    fn is_owned(&self, card: &Card) -> bool;
}

/// Evaluate one condition tree. An absent condition matches everything.
pub fn evaluate_condition(
    card: &Card,
    condition: Option<&Condition>,
    index: &impl CardIndex,
) -> bool {
    match condition {
        None => true,
        Some(Condition::Or { left, right }) => {
            evaluate_condition(card, Some(left.as_ref()), index)
                || evaluate_condition(card, Some(right.as_ref()), index)
        }
        Some(Condition::And { left, right }) => {
            evaluate_condition(card, Some(left.as_ref()), index)
                && evaluate_condition(card, Some(right.as_ref()), index)
        }
        Some(Condition::Filter { value }) => card_matches_filter(card, value, index),
    }
}

/// Top-level roots are combined with an implicit AND.
pub fn matches_all(card: &Card, conditions: &[Condition], index: &impl CardIndex) -> bool {
    conditions
        .iter()
        .all(|condition| evaluate_condition(card, Some(condition), index))
}

/// A single filter string resolved to the field it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate<'a> {
    TypeLine(&'a str),
    Oracle(&'a str),
    /// `c<`: card colors are a non-empty subset of these.
    ColorsWithin(&'a str),
    /// `c=` / `c:`
    ColorsExactly(&'a str),
    /// `c>`: card has at least these colors.
    ColorsInclude(&'a str),
    Set(&'a str),
    Year(&'a str),
    Rarity(&'a str),
    Is(&'a str),
    Name(&'a str),
}

impl<'a> Predicate<'a> {
    /// Split off a leading `!` and resolve the prefix.
    /// Returns the predicate and whether it is negated.
    pub fn parse(filter: &'a str) -> (Self, bool) {
        let (negated, filter) = match filter.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, filter),
        };

        let predicate = if let Some(v) = filter.strip_prefix("t:") {
            Predicate::TypeLine(unquote(v))
        } else if let Some(v) = filter.strip_prefix("o:") {
            Predicate::Oracle(unquote(v))
        } else if let Some(v) = filter.strip_prefix("c<") {
            Predicate::ColorsWithin(v)
        } else if let Some(v) = filter
            .strip_prefix("c=")
            .or_else(|| filter.strip_prefix("c:"))
        {
            Predicate::ColorsExactly(v)
        } else if let Some(v) = filter.strip_prefix("c>") {
            Predicate::ColorsInclude(v)
        } else if let Some(v) = filter.strip_prefix("s:") {
            Predicate::Set(unquote(v))
        } else if let Some(v) = filter.strip_prefix("d:") {
            Predicate::Year(v)
        } else if let Some(v) = filter.strip_prefix("r:") {
            Predicate::Rarity(unquote(v))
        } else if let Some(v) = filter.strip_prefix("is:") {
            Predicate::Is(v)
        } else {
            Predicate::Name(unquote(filter))
        };

        (predicate, negated)
    }

    pub fn matches(&self, card: &Card, index: &impl CardIndex) -> bool {
        match *self {
            Predicate::TypeLine(term) => card.type_line().to_lowercase().contains(term),
            Predicate::Oracle(term) => card.oracle_text().to_lowercase().contains(term),
            Predicate::ColorsWithin(query) => {
                let query = query_colors(query);
                !card.color_identity.is_empty()
                    && card
                        .color_identity
                        .iter()
                        .all(|c| query.contains(&c.to_uppercase()))
            }
            Predicate::ColorsExactly(query) => {
                let mut query = query_colors(query);
                query.sort();
                let mut colors: Vec<String> =
                    card.color_identity.iter().map(|c| c.to_uppercase()).collect();
                colors.sort();
                query == colors
            }
            Predicate::ColorsInclude(query) => query_colors(query).iter().all(|q| {
                card.color_identity
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(q))
            }),
            Predicate::Set(term) => {
                let code = card.set.to_lowercase();
                if index.is_known_set(term) {
                    code == term
                } else {
                    code.contains(term) || card.set_name.to_lowercase().contains(term)
                }
            }
            Predicate::Year(term) => year_matches(&card.released_at, term),
            Predicate::Rarity(term) => card.rarity.to_lowercase() == term,
            Predicate::Is(term) => match term {
                "owned" => index.is_owned(card),
                _ => false,
            },
            Predicate::Name(term) => card.name.to_lowercase().contains(term),
        }
    }
}

fn card_matches_filter(card: &Card, filter: &str, index: &impl CardIndex) -> bool {
    let (predicate, negated) = Predicate::parse(filter);
    let matched = predicate.matches(card, index);
    matched != negated
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// One uppercase color letter per query character.
fn query_colors(query: &str) -> Vec<String> {
    query.chars().map(|c| c.to_uppercase().to_string()).collect()
}

/// `d:2018` matches the exact release year, `d:2015-2017` an inclusive range.
/// Unparseable years or bounds never match.
fn year_matches(released_at: &str, term: &str) -> bool {
    let Some(year) = released_at.get(..4).and_then(parse_year) else {
        return false;
    };

    match term.split_once('-') {
        Some((start, end)) => match (parse_year(start), parse_year(end)) {
            (Some(start), Some(end)) => (start..=end).contains(&year),
            _ => false,
        },
        None => parse_year(term) == Some(year),
    }
}

fn parse_year(s: &str) -> Option<i32> {
    s.trim().parse().ok()
}
