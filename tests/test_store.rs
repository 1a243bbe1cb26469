use cocoa_ranks::store::NameStore;

fn temp_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("ratings-store-{}.json", uuid::Uuid::new_v4()))
}

#[test]
fn test_missing_profile_loads_as_none() {
    let store = NameStore::new(temp_path());
    assert!(store.load().is_none());
}

#[test]
fn test_save_then_load_round_trip() {
    let path = temp_path();
    let store = NameStore::new(&path);

    store.save("iris").expect("save should succeed");
    assert_eq!(store.load().as_deref(), Some("iris"));

    // Each submission overwrites the previous name
    store.save("omar").expect("save should succeed");
    assert_eq!(store.load().as_deref(), Some("omar"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_malformed_profile_loads_as_none() {
    let path = temp_path();
    std::fs::write(&path, "not json at all").expect("write fixture");

    let store = NameStore::new(&path);
    assert!(store.load().is_none());

    let _ = std::fs::remove_file(&path);
}
