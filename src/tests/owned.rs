use crate::cards::Card;
use crate::owned::OwnedCards;
use crate::storage::{BackendLocal, StorageManager};

fn card(id: &str) -> Card {
    Card {
        id: id.to_string(),
        name: format!("Card {id}"),
        ..Default::default()
    }
}

#[test]
pub fn test_toggle() {
    let mut owned = OwnedCards::new();
    assert!(owned.is_missing(&card("a")));

    assert!(owned.toggle("a"));
    assert!(owned.is_owned(&card("a")));

    assert!(!owned.toggle("a"));
    assert!(owned.is_missing(&card("a")));
    assert!(owned.is_empty());
}

#[test]
pub fn test_insert_remove() {
    let mut owned = OwnedCards::new();
    assert!(owned.insert("a"));
    assert!(!owned.insert("a"));
    assert_eq!(owned.len(), 1);
    assert!(owned.remove("a"));
    assert!(!owned.remove("a"));
}

#[test]
pub fn test_parse_lines() {
    let owned: OwnedCards = "# my cards\n a \n\nb\n# c\n".lines().collect();
    assert_eq!(owned.len(), 2);
    assert!(owned.contains("a"));
    assert!(owned.contains("b"));
    assert!(!owned.contains("c"));
}

#[test]
pub fn test_missing_file_is_empty() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let storage = BackendLocal::new(tmp.path()).unwrap();
    let owned = OwnedCards::load(&storage, "owned.txt").unwrap();
    assert!(owned.is_empty());
}

#[test]
pub fn test_save_and_load() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let storage = BackendLocal::new(tmp.path()).unwrap();

    let mut owned = OwnedCards::new();
    owned.insert("b");
    owned.insert("a");
    owned.save(&storage, "owned.txt").unwrap();

    let raw = storage.read("owned.txt").unwrap();
    assert_eq!(String::from_utf8(raw).unwrap(), "a\nb\n");

    let loaded = OwnedCards::load(&storage, "owned.txt").unwrap();
    assert_eq!(loaded, owned);
}
