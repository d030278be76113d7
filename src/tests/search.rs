use crate::cards::{Card, CardStore};
use crate::owned::OwnedCards;
use crate::search::Collection;

fn card(id: &str, name: &str, type_line: &str, colors: &[&str], set: &str) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        type_line: Some(type_line.to_string()),
        color_identity: colors.iter().map(|c| c.to_string()).collect(),
        set: set.to_string(),
        set_name: format!("Set {set}"),
        released_at: "2018-04-27".to_string(),
        rarity: "common".to_string(),
        ..Default::default()
    }
}

fn collection() -> Collection {
    let mut store = CardStore::new();
    store.add(card("1", "Serra Angel", "Creature — Angel", &["W"], "dom"));
    store.add(card("2", "Shivan Dragon", "Creature — Dragon", &["R"], "m19"));
    store.add(card("3", "Sol Ring", "Artifact", &[], "c21"));
    store.add(card("4", "Lightning Helix", "Instant", &["R", "W"], "rav"));

    let owned: OwnedCards = ["1", "3"].into_iter().collect();
    Collection::new(store, owned)
}

fn names<'a>(cards: &[&'a Card]) -> Vec<&'a str> {
    cards.iter().map(|c| c.name.as_str()).collect()
}

#[test]
pub fn test_empty_query_returns_everything() {
    let c = collection();
    assert_eq!(c.search("", false).len(), 4);
    assert_eq!(c.search("   ", false).len(), 4);
}

#[test]
pub fn test_query_is_trimmed_and_lowercased() {
    let c = collection();
    assert_eq!(names(&c.search("  T:Creature AND C:W ", false)), vec!["Serra Angel"]);
}

#[test]
pub fn test_owned_only() {
    let c = collection();
    assert_eq!(names(&c.search("t:creature", true)), vec!["Serra Angel"]);
    assert_eq!(names(&c.search("", true)), vec!["Serra Angel", "Sol Ring"]);
}

#[test]
pub fn test_is_owned_filter() {
    let c = collection();
    assert_eq!(
        names(&c.search("!is:owned", false)),
        vec!["Shivan Dragon", "Lightning Helix"]
    );
}

#[test]
pub fn test_known_set_codes_from_store() {
    let c = collection();
    // "dom" was seen, so it only matches the exact code
    assert_eq!(names(&c.search("s:dom", false)), vec!["Serra Angel"]);
    // "set" is not a code: substring on set names hits everything
    assert_eq!(c.search("s:set", false).len(), 4);
}

#[test]
pub fn test_color_queries() {
    let c = collection();
    assert_eq!(
        names(&c.search("c<rw", false)),
        vec!["Serra Angel", "Shivan Dragon", "Lightning Helix"]
    );
    assert_eq!(names(&c.search("c>rw", false)), vec!["Lightning Helix"]);
    assert_eq!(
        names(&c.search("c:w,r", false)),
        vec!["Serra Angel", "Shivan Dragon"]
    );
}

#[test]
pub fn test_owned_summary() {
    let c = collection();

    let all = c.search("", false);
    assert_eq!(c.owned_summary(&all, "").to_string(), "Owned: 2/4");

    let creatures = c.search("t:creature", false);
    assert_eq!(
        c.owned_summary(&creatures, "t:creature").to_string(),
        "Owned: 1/2 shown (2 total)"
    );
}
