//! QuickUrl RPC Server: JSON-RPC over stdin/stdout for the menu-bar UI.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"list.add", "params":{"title":"...","target":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Events:   {"event":"list.changed", "kind":"added", ...} after mutations.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use quickurl::app::App;
use quickurl::managers::list_manager::ListManagerTrait;
use quickurl::rpc_handler::{event_json, handle_method};
use quickurl::services::logging;
use quickurl::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

use serde_json::{json, Value};
use tracing::{error, info, warn};

fn emit(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    let mut settings_engine = SettingsEngine::new(std::env::var("QUICKURL_CONFIG").ok());
    let settings_result = settings_engine.load();
    logging::init(&settings_engine.get_settings().logging.level);
    if let Err(e) = settings_result {
        warn!(error = %e, "Using default settings");
    }

    let mut app = match App::new(settings_engine) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Failed to initialize QuickUrl");
            std::process::exit(1);
        }
    };
    let events = app.list_manager.subscribe();
    let app = Mutex::new(app);
    info!("QuickUrl RPC server ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if emit(&mut out, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")})).is_err() {
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));
                match handle_method(&app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => json!({"id": id, "error": err}),
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if emit(&mut out, &response).is_err() {
            break;
        }
        for event in events.try_iter() {
            if emit(&mut out, &event_json(&event)).is_err() {
                return;
            }
        }
    }
}
