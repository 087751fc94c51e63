//! Unit tests for the RPC handler, covering the methods the menu-bar UI calls.
//!
//! These go through the same code path as the `quickurl-rpc` binary, using a
//! temporary on-disk database and a headless file chooser.

use std::sync::Mutex;

use quickurl::app::{App, Broker};
use quickurl::managers::list_manager::{ListEvent, ListManagerTrait};
use quickurl::platform::bookmarks::PathBookmarkStore;
use quickurl::platform::dialog::HeadlessPrompt;
use quickurl::platform::opener::SystemOpener;
use quickurl::rpc_handler::{base64_decode, base64_encode, event_json, handle_method};
use quickurl::services::file_access_broker::{BookmarkStore, FileAccessBroker, FilePrompt, UrlOpener};
use quickurl::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use serde_json::{json, Value};
use tempfile::TempDir;

fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let mut settings =
        SettingsEngine::new(Some(tmp.path().join("settings.json").to_string_lossy().to_string()));
    settings
        .set_value(
            "storage.database_path",
            json!(tmp.path().join("test.db").to_string_lossy()),
        )
        .unwrap();
    let broker: Broker = FileAccessBroker::new(
        Box::new(PathBookmarkStore) as Box<dyn BookmarkStore>,
        Box::new(HeadlessPrompt) as Box<dyn FilePrompt>,
        Box::new(SystemOpener) as Box<dyn UrlOpener>,
    );
    let app = App::with_broker(settings, broker).expect("Failed to init App");
    (Mutex::new(app), tmp)
}

fn titles(app: &Mutex<App>) -> Vec<String> {
    let res = handle_method(app, "list.snapshot", &json!({})).unwrap();
    res["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect()
}

fn clear(app: &Mutex<App>) {
    handle_method(app, "list.delete_at", &json!({"offsets": [0, 1, 2, 3]})).unwrap();
}

// ─── Misc ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "ping", &json!({})).unwrap();
    assert_eq!(res, json!({"pong": true}));
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

#[test]
fn test_base64_helpers() {
    assert_eq!(base64_encode(b"tok"), "dG9r");
    assert_eq!(base64_decode("dG9r").unwrap(), b"tok".to_vec());
    assert!(base64_decode("***").is_err());
}

// ─── List ───

#[test]
fn test_snapshot_starts_with_seed() {
    let (app, _tmp) = setup();
    assert_eq!(titles(&app), vec!["Google", "GitHub", "", "Stack Overflow"]);
}

#[test]
fn test_add_and_divider() {
    let (app, _tmp) = setup();
    clear(&app);
    let res = handle_method(&app, "list.add", &json!({"title": "Docs", "target": "https://docs.rs"}))
        .unwrap();
    assert!(res["id"].is_string());
    handle_method(&app, "list.add_divider", &json!({})).unwrap();

    let snap = handle_method(&app, "list.snapshot", &json!({})).unwrap();
    let items = snap["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["target"], "https://docs.rs");
    assert_eq!(items[1]["isDivider"], true);
}

#[test]
fn test_add_missing_params() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "list.add", &json!({"title": "x"})).unwrap_err();
    assert_eq!(err, "missing target");
}

#[test]
fn test_update_found_and_missing() {
    let (app, _tmp) = setup();
    let id = handle_method(&app, "list.add", &json!({"title": "A", "target": "https://a.com"}))
        .unwrap()["id"]
        .clone();

    let res = handle_method(
        &app,
        "list.update",
        &json!({"id": id, "title": "A2", "target": "https://a2.com"}),
    )
    .unwrap();
    assert_eq!(res["found"], true);
    assert_eq!(titles(&app).last().unwrap(), "A2");

    let res = handle_method(
        &app,
        "list.update",
        &json!({"id": uuid::Uuid::new_v4(), "title": "Z", "target": "https://z.com"}),
    )
    .unwrap();
    assert_eq!(res["found"], false);
    assert_eq!(titles(&app).len(), 5);
}

#[test]
fn test_update_rejects_malformed_id() {
    let (app, _tmp) = setup();
    let err = handle_method(
        &app,
        "list.update",
        &json!({"id": "nope", "title": "Z", "target": "https://z.com"}),
    )
    .unwrap_err();
    assert!(err.starts_with("invalid id"));
}

#[test]
fn test_update_token_round_trips_as_base64() {
    let (app, _tmp) = setup();
    let id = handle_method(&app, "list.add", &json!({"title": "F", "target": "file:///tmp/f.txt"}))
        .unwrap()["id"]
        .clone();
    handle_method(&app, "list.update_token", &json!({"id": id, "token": "dG9r"})).unwrap();

    let snap = handle_method(&app, "list.snapshot", &json!({})).unwrap();
    let last = snap["items"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["bookmarkToken"], "dG9r");

    handle_method(&app, "list.update_token", &json!({"id": id, "token": null})).unwrap();
    let snap = handle_method(&app, "list.snapshot", &json!({})).unwrap();
    assert!(snap["items"].as_array().unwrap().last().unwrap().get("bookmarkToken").is_none());
}

#[test]
fn test_delete_at_batch() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "list.delete_at", &json!({"offsets": [0, 2]})).unwrap();
    assert_eq!(res["removed"].as_array().unwrap().len(), 2);
    assert_eq!(titles(&app), vec!["GitHub", "Stack Overflow"]);
}

#[test]
fn test_move() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "list.move", &json!({"from": [3], "to": 0})).unwrap();
    assert_eq!(res["moved"], true);
    assert_eq!(titles(&app), vec!["Stack Overflow", "Google", "GitHub", ""]);
}

#[test]
fn test_move_rejects_negative_offsets() {
    let (app, _tmp) = setup();
    assert!(handle_method(&app, "list.move", &json!({"from": [-1], "to": 0})).is_err());
}

#[test]
fn test_load_all_returns_stored_state() {
    let (app, _tmp) = setup();
    handle_method(&app, "list.add_divider", &json!({})).unwrap();
    let res = handle_method(&app, "list.load_all", &json!({})).unwrap();
    assert_eq!(res["items"].as_array().unwrap().len(), 5);
}

// ─── Entries / Menu ───

#[test]
fn test_validate_draft() {
    let (app, _tmp) = setup();
    let res = handle_method(
        &app,
        "entry.validate",
        &json!({"title": " Rust ", "target": " https://rust-lang.org "}),
    )
    .unwrap();
    assert_eq!(res["can_save"], true);
    assert_eq!(res["title"], "Rust");

    let res = handle_method(&app, "entry.validate", &json!({"title": "x", "target": "not a url"}))
        .unwrap();
    assert_eq!(res["can_save"], false);
}

#[test]
fn test_open_divider_reports_not_opened() {
    let (app, _tmp) = setup();
    let id = handle_method(&app, "list.add_divider", &json!({})).unwrap()["id"].clone();
    let res = handle_method(&app, "entry.open", &json!({"id": id})).unwrap();
    assert_eq!(res["opened"], false);
}

#[test]
fn test_entry_test_refuses_non_web_targets() {
    let (app, _tmp) = setup();
    for target in ["not a url", "file:///etc/hosts", "ftp://example.com"] {
        let res = handle_method(&app, "entry.test", &json!({"target": target})).unwrap();
        assert_eq!(res["opened"], false, "target {target}");
    }
    let err = handle_method(&app, "entry.test", &json!({})).unwrap_err();
    assert_eq!(err, "missing target");
}

#[test]
fn test_update_on_divider_reports_not_found() {
    let (app, _tmp) = setup();
    let id = handle_method(&app, "list.add_divider", &json!({})).unwrap()["id"].clone();
    let res = handle_method(
        &app,
        "list.update",
        &json!({"id": id, "title": "T", "target": "https://t.com"}),
    )
    .unwrap();
    assert_eq!(res["found"], false);
    assert_eq!(titles(&app).last().unwrap(), "");
}

#[test]
fn test_seed_ids_survive_menu_rebuild() {
    let (app, _tmp) = setup();
    let before = handle_method(&app, "list.snapshot", &json!({})).unwrap()["items"].clone();
    handle_method(&app, "menu.build", &json!({})).unwrap();
    let after = handle_method(&app, "list.snapshot", &json!({})).unwrap()["items"].clone();
    assert_eq!(before, after);
}

#[test]
fn test_menu_build() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "menu.build", &json!({})).unwrap();
    let items = res.as_array().unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(items[0]["kind"], "link");
    assert_eq!(items[2]["kind"], "separator");
    assert_eq!(items[5], json!({"kind": "manage", "shortcut": ","}));
    assert_eq!(items[6], json!({"kind": "quit", "shortcut": "q"}));
}

// ─── Settings ───

#[test]
fn test_settings_get_and_set() {
    let (app, _tmp) = setup();
    handle_method(&app, "settings.set", &json!({"key": "menu.show_quit_item", "value": false}))
        .unwrap();
    let res = handle_method(&app, "settings.get", &json!({})).unwrap();
    assert_eq!(res["menu"]["show_quit_item"], false);

    let menu = handle_method(&app, "menu.build", &json!({})).unwrap();
    assert_eq!(menu.as_array().unwrap().len(), 6);

    assert!(handle_method(&app, "settings.set", &json!({"key": "bogus", "value": 1})).is_err());
}

// ─── Events ───

#[test]
fn test_mutations_queue_change_events() {
    let (app, _tmp) = setup();
    let rx = app.lock().unwrap().list_manager.subscribe();
    handle_method(&app, "list.add_divider", &json!({})).unwrap();
    handle_method(&app, "list.move", &json!({"from": [0], "to": 9})).unwrap();

    let events: Vec<Value> = rx.try_iter().map(|e| event_json(&e)).collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["kind"], "added");
    assert_eq!(events[1], event_json(&ListEvent::Moved));
}
