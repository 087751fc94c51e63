//! RPC method handler for the QuickUrl JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The external UI process drives the list through these methods.

use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::App;
use crate::managers::list_manager::{ListEvent, ListManagerTrait};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::entry::{EntryDraft, ListEntry};

/// Encode bytes to base64 string.
pub fn base64_encode(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Decode base64 string to bytes.
pub fn base64_decode(input: &str) -> Result<Vec<u8>, String> {
    BASE64
        .decode(input)
        .map_err(|e| format!("base64 decode error: {}", e))
}

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing {}", name))
}

fn id_param(params: &Value) -> Result<Uuid, String> {
    let raw = str_param(params, "id")?;
    Uuid::parse_str(raw).map_err(|e| format!("invalid id: {}", e))
}

fn offsets_param(params: &Value, name: &str) -> Result<Vec<usize>, String> {
    let arr = params
        .get(name)
        .and_then(Value::as_array)
        .ok_or_else(|| format!("missing {}", name))?;
    arr.iter()
        .map(|v| {
            v.as_u64()
                .map(|n| n as usize)
                .ok_or_else(|| format!("invalid offset in {}", name))
        })
        .collect()
}

fn entries_json(entries: &[ListEntry]) -> Result<Value, String> {
    serde_json::to_value(entries).map_err(|e| e.to_string())
}

/// JSON form of a change notification, as pushed to the UI.
pub fn event_json(event: &ListEvent) -> Value {
    match event {
        ListEvent::Reloaded => json!({"event": "list.changed", "kind": "reloaded"}),
        ListEvent::Added { id } => json!({"event": "list.changed", "kind": "added", "id": id}),
        ListEvent::Updated { id } => {
            json!({"event": "list.changed", "kind": "updated", "id": id})
        }
        ListEvent::Removed { ids } => {
            json!({"event": "list.changed", "kind": "removed", "ids": ids})
        }
        ListEvent::Moved => json!({"event": "list.changed", "kind": "moved"}),
    }
}

/// Dispatch a JSON-RPC method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` for malformed requests.
/// List operations themselves never fail; misses report `"found": false`.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── List ───
        "list.load_all" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.list_manager.load_all();
            Ok(json!({"items": entries_json(a.list_manager.entries())?}))
        }
        "list.snapshot" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"items": entries_json(a.list_manager.entries())?}))
        }
        "list.add" => {
            let title = str_param(params, "title")?;
            let target = str_param(params, "target")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a.list_manager.add(title, target);
            Ok(json!({"id": id}))
        }
        "list.add_divider" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a.list_manager.add_divider();
            Ok(json!({"id": id}))
        }
        "list.update" => {
            let id = id_param(params)?;
            let title = str_param(params, "title")?;
            let target = str_param(params, "target")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let found = a.list_manager.update(&id, title, target);
            Ok(json!({"found": found}))
        }
        "list.update_token" => {
            let id = id_param(params)?;
            let token = match params.get("token") {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(base64_decode(s)?),
                Some(_) => return Err("token must be a base64 string or null".to_string()),
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let found = a.list_manager.update_bookmark_token(&id, token);
            Ok(json!({"found": found}))
        }
        "list.delete_at" => {
            let offsets = offsets_param(params, "offsets")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a.list_manager.delete_at(&offsets);
            Ok(json!({"removed": removed}))
        }
        "list.move" => {
            let from = offsets_param(params, "from")?;
            let to = params
                .get("to")
                .and_then(Value::as_u64)
                .ok_or("missing to")? as usize;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let moved = a.list_manager.move_entries(&from, to);
            Ok(json!({"moved": moved}))
        }

        // ─── Entries ───
        "entry.open" => {
            let id = id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let opened = a.open_entry(&id);
            Ok(json!({"opened": opened}))
        }
        "entry.test" => {
            let target = str_param(params, "target")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"opened": a.test_target(target)}))
        }
        "entry.validate" => {
            let draft = EntryDraft::new(
                params.get("title").and_then(Value::as_str).unwrap_or(""),
                params.get("target").and_then(Value::as_str).unwrap_or(""),
            );
            let (title, target) = draft.trimmed();
            Ok(json!({"can_save": draft.can_save(), "title": title, "target": target}))
        }

        // ─── Menu ───
        "menu.build" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let items = a.menu();
            serde_json::to_value(items).map_err(|e| e.to_string())
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
