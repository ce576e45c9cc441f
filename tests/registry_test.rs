//! Integration tests for the author registry and its backing store

use galsync::registry::{store, AuthorRegistry};
use tempfile::tempdir;

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("authors.txt");

    let registry = AuthorRegistry::load(&path, "fur_affinity");

    assert!(registry.is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("authors.txt");

    let mut registry = AuthorRegistry::load(&path, "fur_affinity");
    registry.add_all(["wolf10", "aardwolf", "wolf2"]);
    registry.save(&path);

    let reloaded = AuthorRegistry::load(&path, "fur_affinity");
    assert_eq!(reloaded.names(), ["aardwolf", "wolf2", "wolf10"]);
}

#[test]
fn test_save_creates_registry_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("authors.txt");

    let mut registry = AuthorRegistry::new("fur_affinity");
    registry.add("fox");
    registry.save(&path);

    assert!(path.exists());
    assert_eq!(AuthorRegistry::load(&path, "fur_affinity").names(), ["fox"]);
}

#[test]
fn test_uncreatable_directory_is_silent_noop() {
    let dir = tempdir().unwrap();
    // A file where the directory should be makes create_dir_all fail
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("sub").join("authors.txt");

    let mut registry = AuthorRegistry::new("fur_affinity");
    registry.add("fox");
    // Not persisted, but also not an error
    registry.save(&path);

    assert!(!path.exists());
}

#[test]
fn test_case_duplicates_collapse_across_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("authors.txt");

    let mut registry = AuthorRegistry::new("fur_affinity");
    registry.add("Fox");
    registry.add("fox");
    registry.save(&path);

    let reloaded = AuthorRegistry::load(&path, "fur_affinity");
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_two_services_share_one_store_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("authors.txt");

    let mut fa = AuthorRegistry::new("fur_affinity");
    fa.add("fox");
    fa.save(&path);

    let mut weasyl = AuthorRegistry::new("weasyl");
    weasyl.add("otter");
    weasyl.save(&path);

    assert_eq!(AuthorRegistry::load(&path, "fur_affinity").names(), ["fox"]);
    assert_eq!(AuthorRegistry::load(&path, "weasyl").names(), ["otter"]);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[FUR AFFINITY]"));
    assert!(content.contains("[WEASYL]"));
}

#[test]
fn test_store_keys_are_stable_integers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("authors.txt");

    store::write_section(&path, "fur_affinity", &["a".to_string(), "b".to_string()]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("1=a"));
    assert!(content.contains("2=b"));
}

#[test]
fn test_delete_then_persist() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("authors.txt");

    let mut registry = AuthorRegistry::new("fur_affinity");
    registry.add_all(["a", "b", "c"]);
    registry.delete(&[2]);
    registry.save(&path);

    assert_eq!(AuthorRegistry::load(&path, "fur_affinity").names(), ["a", "c"]);
}
