//! On-disk behavior of the JSON vault store: round-trips, degradation on
//! missing/corrupt files, and the whole-file rewrite contract.

use nexus_core::{VaultItem, VaultRepository};
use nexus_vault::{remove, render_order, JsonVaultStore};

fn store_in(dir: &tempfile::TempDir) -> JsonVaultStore {
    JsonVaultStore::new(dir.path().join("nexus_vault.json"))
}

#[test]
fn load_missing_file_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(store.load().is_empty());
}

#[test]
fn load_corrupt_file_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "{not json at all").unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn load_wrong_shape_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), r#"{"api_key": "oops"}"#).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let items = vec![
        VaultItem::new("site:example.com filetype:pdf", "recon,pdf", "quarterly sweep"),
        VaultItem::new("inurl:admin intitle:login", "", ""),
    ];
    store.save(&items).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, items);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonVaultStore::new(dir.path().join("nested").join("deep").join("vault.json"));
    store.save(&[VaultItem::new("site:x", "", "")]).unwrap();
    assert_eq!(store.load().len(), 1);
}

#[test]
fn save_overwrites_the_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let many: Vec<VaultItem> = (0..10)
        .map(|i| VaultItem::new(format!("intext:{}", i), "", ""))
        .collect();
    store.save(&many).unwrap();

    let one = vec![VaultItem::new("site:only", "", "")];
    store.save(&one).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].dork, "site:only");
}

#[test]
fn saved_file_is_valid_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&[VaultItem::new("site:x", "", "")]).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array());
    assert!(raw.contains('\n'), "vault file should be pretty-printed");
}

#[test]
fn add_appends_persists_and_returns_the_item() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut items = store.load();
    let first = store.add(&mut items, "site:x", "", "").unwrap();
    let second = store.add(&mut items, "filetype:env", "vulns", "check").unwrap();

    assert_eq!(items.len(), 2);
    assert_ne!(first.id, second.id);
    assert_eq!(items.last().unwrap().dork, "filetype:env");

    // A fresh load sees exactly what add persisted
    let reloaded = store.load();
    assert_eq!(reloaded, items);
}

#[test]
fn add_timestamps_are_well_formed() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut items = Vec::new();
    store.add(&mut items, "site:x", "", "").unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let ts = value[0]["timestamp"].as_str().unwrap();
    assert!(ts.parse::<chrono::DateTime<chrono::Utc>>().is_ok());
}

#[test]
fn remove_then_save_persists_the_deletion() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut items = Vec::new();
    let doomed = store.add(&mut items, "site:gone", "", "").unwrap();
    store.add(&mut items, "site:kept", "", "").unwrap();

    let items = remove(&items, doomed.id);
    store.save(&items).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].dork, "site:kept");
}

#[test]
fn unknown_fields_in_the_file_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let raw = format!(
        r##"[{{
            "id": "{}",
            "dork": "site:example.com",
            "tags": "t",
            "notes": "n",
            "timestamp": "2026-01-15T10:30:00Z",
            "starred": true,
            "color": "#00ff00"
        }}]"##,
        uuid::Uuid::nil()
    );
    std::fs::write(store.path(), raw).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].dork, "site:example.com");
}

#[test]
fn render_order_reverses_append_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut items = Vec::new();
    store.add(&mut items, "a", "", "").unwrap();
    store.add(&mut items, "b", "", "").unwrap();
    store.add(&mut items, "c", "", "").unwrap();

    let rendered = render_order(&items);
    let dorks: Vec<&str> = rendered.iter().map(|i| i.dork.as_str()).collect();
    assert_eq!(dorks, vec!["c", "b", "a"]);
}
