//! Integration tests for vibe-store
//!
//! These tests verify persistence across store instances for every durable slot.

use proptest::prelude::*;
use tempfile::TempDir;
use vibe_domain::seed::{default_user, seed_entries};
use vibe_domain::{assemble_at, EntryInput, User, UserRole};
use vibe_store::{
    deserialize, serialize, EntryStore, FileSlot, KeyValueSlot, LoadOutcome, SqliteSlot,
    StoreError, ENTRIES_KEY,
};

fn input(title: &str, tags: &[&str]) -> EntryInput {
    let mut input = EntryInput::new(title, "Generate a landing page");
    input.tags = tags.iter().map(|t| t.to_string()).collect();
    input
}

#[test]
fn test_file_slot_survives_restart() {
    let dir = TempDir::new().unwrap();

    let created_id = {
        let mut store = EntryStore::new(FileSlot::new(dir.path()).unwrap());
        store.load(seed_entries(100_000_000)).unwrap();
        let entry = assemble_at(input("Landing", &["web"]), &default_user(), 100_000_001).unwrap();
        let id = entry.id.clone();
        store.append(entry).unwrap();
        id
    };

    let mut reopened = EntryStore::new(FileSlot::new(dir.path()).unwrap());
    let entries = reopened.load(Vec::new()).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id, created_id);
    assert_eq!(entries[1].id.as_str(), "1");
}

#[test]
fn test_sqlite_slot_survives_restart() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("vibe.db");

    {
        let mut store = EntryStore::new(SqliteSlot::new(&db).unwrap());
        store.load(Vec::new()).unwrap();
        let entry = assemble_at(input("Only", &[]), &default_user(), 5).unwrap();
        store.append(entry).unwrap();
    }

    let mut reopened = EntryStore::new(SqliteSlot::new(&db).unwrap());
    let entries = reopened.load(seed_entries(0)).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Only");
}

#[test]
fn test_corrupt_file_is_reported_then_recovered() {
    let dir = TempDir::new().unwrap();
    let mut slot = FileSlot::new(dir.path()).unwrap();
    slot.write(ENTRIES_KEY, "[{\"id\": 1}").unwrap();

    let mut store = EntryStore::new(slot);
    assert!(matches!(
        store.load(seed_entries(0)),
        Err(StoreError::DataCorruption(_))
    ));

    match store.load_or_seed(seed_entries(0)).unwrap() {
        LoadOutcome::Recovered(StoreError::DataCorruption(_)) => {}
        other => panic!("Expected recovery from corruption, got {:?}", other),
    }
    assert_eq!(store.entries().len(), 2);

    // The next append replaces the corrupt snapshot
    let entry = assemble_at(input("Fresh", &[]), &default_user(), 1).unwrap();
    store.append(entry).unwrap();

    let mut reopened = EntryStore::new(FileSlot::new(dir.path()).unwrap());
    assert!(matches!(
        reopened.load_or_seed(Vec::new()).unwrap(),
        LoadOutcome::Restored(3)
    ));
}

#[test]
fn test_persisted_format() {
    let dir = TempDir::new().unwrap();
    let slot = FileSlot::new(dir.path()).unwrap();
    let path = slot.path_for(ENTRIES_KEY);

    let mut store = EntryStore::new(slot);
    store.load(Vec::new()).unwrap();
    let entry = assemble_at(input("Shape", &["a"]), &default_user(), 42).unwrap();
    store.append(entry).unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &json[0];

    assert_eq!(first["createdAt"], 42);
    assert_eq!(first["updatedAt"], 42);
    assert_eq!(first["version"], 1);
    assert_eq!(first["likes"], 0);
    assert_eq!(first["author"]["role"], "ENGINEER");
    assert!(first.get("aiRating").is_none());
    assert!(first.get("builderUrl").is_none());
}

fn arb_user() -> impl Strategy<Value = User> {
    (
        "[a-z0-9]{1,6}",
        "\\PC{0,12}",
        prop_oneof![Just(UserRole::Admin), Just(UserRole::Engineer), Just(UserRole::Viewer)],
    )
        .prop_map(|(id, name, role)| User::new(id, name, "", role))
}

proptest! {
    /// Property: deserialize(serialize(E)) == E, and re-serialization is byte-identical
    #[test]
    fn test_snapshot_roundtrip(
        rows in prop::collection::vec(
            (
                "\\PC{1,20}",
                "\\PC{0,40}",
                "\\PC{1,40}",
                prop::collection::vec("[a-z]{1,6}", 0..5),
                proptest::option::of("https://[a-z]{3,8}\\.dev"),
                proptest::option::of(1u8..=10),
                arb_user(),
                0u64..2_000_000_000_000,
            ),
            0..6,
        )
    ) {
        let entries: Vec<_> = rows
            .into_iter()
            .filter_map(|(title, description, prompt, tags, url, rating, author, now)| {
                let mut input = EntryInput::new(title, prompt);
                input.description = description;
                input.tags = tags;
                input.deployed_url = url;
                input.ai_rating = rating;
                assemble_at(input, &author, now).ok()
            })
            .collect();

        let text = serialize(&entries).unwrap();
        let decoded = deserialize(&text).unwrap();
        prop_assert_eq!(&decoded, &entries);
        prop_assert_eq!(serialize(&decoded).unwrap(), text);
    }
}
