//! Object-store primitives and the on-disk round trip.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use mnrdesk::store::{checklists, ObjectStore, StoreName};
use mnrdesk::types::{DailyChecklist, Department, IpPhone, Nvr, User};

// ============================================================================
// PRIMITIVES
// ============================================================================

#[test]
fn add_get_put_delete_cycle() {
    let mut store = ObjectStore::in_memory();
    let mut user = User {
        name: "A. Mathews".to_string(),
        designation: "Technician".to_string(),
        ..User::default()
    };
    store.add(&mut user).unwrap();
    assert!(user.id > 0);

    let loaded: User = store.get(user.id).unwrap().expect("stored user");
    assert_eq!(loaded, user);

    user.designation = "Supervisor".to_string();
    store.put(&user).unwrap();
    let loaded: User = store.get(user.id).unwrap().unwrap();
    assert_eq!(loaded.designation, "Supervisor");

    assert!(store.delete(StoreName::Users, user.id));
    assert!(store.get::<User>(user.id).unwrap().is_none());
}

#[test]
fn ids_are_unique_across_stores() {
    // The counter is shared, so records created back-to-back in
    // different stores can never collide.
    let mut store = ObjectStore::in_memory();
    let mut dept = Department::default();
    let mut phone = IpPhone::default();
    let mut user = User::default();
    store.add(&mut dept).unwrap();
    store.add(&mut phone).unwrap();
    store.add(&mut user).unwrap();

    let mut ids = [dept.id, phone.id, user.id];
    ids.sort_unstable();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn bulk_put_assigns_missing_ids() {
    let mut store = ObjectStore::in_memory();
    let mut users = vec![User::default(), User { id: 40, ..User::default() }, User::default()];
    store.bulk_put(&mut users).unwrap();

    assert!(users[0].id > 0);
    assert_eq!(users[1].id, 40);
    assert!(users[2].id > 40, "counter advanced past the explicit id");
    assert_eq!(store.len(StoreName::Users), 3);
}

#[test]
fn get_all_returns_id_order() {
    let mut store = ObjectStore::in_memory();
    for name in ["c", "a", "b"] {
        store
            .add(&mut Department {
                name: name.to_string(),
                ..Department::default()
            })
            .unwrap();
    }
    let all: Vec<Department> = store.get_all().unwrap();
    let ids: Vec<u64> = all.iter().map(|d| d.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

// ============================================================================
// DISK ROUND TRIP
// ============================================================================

#[test]
fn open_save_open_round_trips_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mnrdesk.json");

    let saved_id;
    {
        let mut store = ObjectStore::open(&path).unwrap();
        let mut nvr = common::nvr_with_cameras(0, 3);
        nvr.id = 0;
        store.add(&mut nvr).unwrap();
        let mut checklist = checklists::new_from_nvr(&mut store, &nvr, common::date(2024, 6, 1));
        checklists::save(&mut store, &mut checklist).unwrap();
        saved_id = checklist.id;
        store.save().unwrap();
    }

    let store = ObjectStore::open(&path).unwrap();
    assert_eq!(store.len(StoreName::Nvrs), 1);
    let loaded: DailyChecklist = store.get(saved_id).unwrap().expect("persisted checklist");
    assert_eq!(loaded.cameras.len(), 3);
}

#[test]
fn reopened_store_continues_the_id_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mnrdesk.json");

    let first_id;
    {
        let mut store = ObjectStore::open(&path).unwrap();
        let mut dept = Department::default();
        store.add(&mut dept).unwrap();
        first_id = dept.id;
        store.save().unwrap();
    }

    let mut store = ObjectStore::open(&path).unwrap();
    let mut dept = Department::default();
    store.add(&mut dept).unwrap();
    assert!(dept.id > first_id);
}

#[test]
fn unknown_top_level_keys_survive_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mnrdesk.json");
    std::fs::write(
        &path,
        r#"{"users": [], "legacy_blob": {"theme": "dark"}}"#,
    )
    .unwrap();

    let mut store = ObjectStore::open(&path).unwrap();
    store.add(&mut User::default()).unwrap();
    store.save().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["legacy_blob"]["theme"], "dark");
    assert_eq!(doc["users"].as_array().unwrap().len(), 1);
}

#[test]
fn open_rejects_non_object_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mnrdesk.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(ObjectStore::open(&path).is_err());
}

#[test]
fn missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ObjectStore::open(&dir.path().join("absent.json")).unwrap();
    assert!(StoreName::ALL.iter().all(|&s| store.is_empty(s)));
}

#[test]
fn clear_empties_a_single_store() {
    let mut store = ObjectStore::in_memory();
    store.add(&mut User::default()).unwrap();
    store.add(&mut Department::default()).unwrap();

    assert!(store.clear(StoreName::Users));
    assert!(store.is_empty(StoreName::Users));
    assert_eq!(store.len(StoreName::Departments), 1);
    assert!(!store.clear(StoreName::Users), "already empty");
}

#[test]
fn store_names_parse_their_keys() {
    for name in StoreName::ALL {
        assert_eq!(StoreName::parse(name.as_str()), Some(name));
    }
    assert_eq!(StoreName::parse("unknown"), None);
}

#[test]
fn nvr_entity_round_trips_through_the_store() {
    let mut store = ObjectStore::in_memory();
    let mut nvr = common::nvr_with_cameras(0, 2);
    nvr.id = 0;
    store.add(&mut nvr).unwrap();
    let loaded: Nvr = store.get(nvr.id).unwrap().unwrap();
    assert_eq!(loaded, nvr);
}
