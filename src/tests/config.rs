use crate::config::Config;
use crate::storage::{BackendLocal, StorageManager};

#[test]
pub fn test_default_config_written() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let config = Config::load_with(tmp.path()).unwrap();

    assert_eq!(config.catalog_path, "cards.json");
    assert_eq!(config.owned_path, "owned.txt");
    assert!(!config.owned_only);
    assert!(tmp.path().join("config.yaml").exists());
    assert_eq!(config.resolve("cards.json"), tmp.path().join("cards.json"));
}

#[test]
pub fn test_partial_config_uses_defaults() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let storage = BackendLocal::new(tmp.path()).unwrap();
    storage
        .write("config.yaml", b"owned_only: true\ncatalog_path: /data/scryfall.json\n")
        .unwrap();

    let config = Config::load_with(tmp.path()).unwrap();
    assert!(config.owned_only);
    assert_eq!(config.owned_path, "owned.txt");
    // absolute paths are not re-rooted
    assert_eq!(
        config.resolve(&config.catalog_path),
        std::path::PathBuf::from("/data/scryfall.json")
    );
}

#[test]
pub fn test_save_roundtrip() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let mut config = Config::load_with(tmp.path()).unwrap();
    config.owned_only = true;
    config.save().unwrap();

    let reloaded = Config::load_with(tmp.path()).unwrap();
    assert!(reloaded.owned_only);
}

#[test]
pub fn test_invalid_config() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let storage = BackendLocal::new(tmp.path()).unwrap();

    storage.write("config.yaml", b"catalog_path: ''\n").unwrap();
    assert!(Config::load_with(tmp.path()).is_err());

    storage.write("config.yaml", b"owned_only: [not, a, bool]\n").unwrap();
    assert!(Config::load_with(tmp.path()).is_err());
}
