//! QuickUrl command-line front end.
//!
//! Drives the same list core the menu-bar UI uses, one command per run:
//!
//! ```text
//! quickurl list | menu | reload
//! quickurl add <title> <target>
//! quickurl divider
//! quickurl update <id> <title> <target>
//! quickurl delete <offset>...
//! quickurl move <offset>... --to <offset>
//! quickurl open <id>
//! ```

use std::process::ExitCode;

use quickurl::app::App;
use quickurl::managers::list_manager::ListManagerTrait;
use quickurl::services::logging;
use quickurl::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use quickurl::types::entry::{EntryDraft, ListEntry};
use quickurl::types::menu::MenuItem;
use tracing::warn;
use uuid::Uuid;

const USAGE: &str = "usage: quickurl <list|menu|reload|add|divider|update|delete|move|open> [args]";

fn print_entries(entries: &[ListEntry]) {
    for (offset, entry) in entries.iter().enumerate() {
        if entry.is_divider {
            println!("{:>3}  ────────", offset);
        } else {
            let marker = if entry.is_valid() { ' ' } else { '!' };
            println!("{:>3} {} {}  {}  [{}]", offset, marker, entry.title, entry.target, entry.id);
        }
    }
}

fn print_menu(items: &[MenuItem]) {
    for item in items {
        match item {
            MenuItem::Link { title, .. } => println!("  {}", title),
            MenuItem::Separator => println!("  ────────"),
            MenuItem::Manage { shortcut } => println!("  Manage URLs...  ⌘{}", shortcut),
            MenuItem::Quit { shortcut } => println!("  Quit  ⌘{}", shortcut),
        }
    }
}

fn parse_offsets(args: &[String]) -> Result<Vec<usize>, String> {
    args.iter()
        .map(|a| a.parse::<usize>().map_err(|_| format!("invalid offset: {}", a)))
        .collect()
}

fn parse_id(arg: Option<&String>) -> Result<Uuid, String> {
    let raw = arg.ok_or("missing id")?;
    Uuid::parse_str(raw).map_err(|e| format!("invalid id: {}", e))
}

fn run(app: &mut App, args: &[String]) -> Result<(), String> {
    let command = args.first().map(String::as_str).unwrap_or("list");
    let rest = args.get(1..).unwrap_or(&[]);

    match command {
        "list" => print_entries(app.entries()),
        "reload" => {
            app.list_manager.load_all();
            print_entries(app.entries());
        }
        "menu" => print_menu(&app.menu()),
        "add" => {
            let [title, target] = rest else {
                return Err("usage: quickurl add <title> <target>".to_string());
            };
            let draft = EntryDraft::new(title, target);
            if !draft.can_save() {
                return Err(format!("not a valid http(s) URL: {}", target.trim()));
            }
            let (title, target) = draft.trimmed();
            println!("{}", app.list_manager.add(&title, &target));
        }
        "divider" => println!("{}", app.list_manager.add_divider()),
        "update" => {
            let id = parse_id(rest.first())?;
            let [_, title, target] = rest else {
                return Err("usage: quickurl update <id> <title> <target>".to_string());
            };
            if !app.list_manager.update(&id, title.trim(), target.trim()) {
                println!("no entry with id {}", id);
            }
        }
        "delete" => {
            let removed = app.list_manager.delete_at(&parse_offsets(rest)?);
            println!("removed {}", removed.len());
        }
        "move" => {
            let split = rest
                .iter()
                .position(|a| a == "--to")
                .ok_or("usage: quickurl move <offset>... --to <offset>")?;
            let from = parse_offsets(&rest[..split])?;
            let to = parse_offsets(&rest[split + 1..])?
                .first()
                .copied()
                .ok_or("missing destination")?;
            app.list_manager.move_entries(&from, to);
            print_entries(app.entries());
        }
        "open" => {
            let id = parse_id(rest.first())?;
            if !app.open_entry(&id) {
                println!("nothing to open for {}", id);
            }
        }
        _ => return Err(USAGE.to_string()),
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut settings_engine = SettingsEngine::new(std::env::var("QUICKURL_CONFIG").ok());
    let settings_result = settings_engine.load();
    logging::init(&settings_engine.get_settings().logging.level);
    if let Err(e) = settings_result {
        warn!(error = %e, "Using default settings");
    }

    let mut app = match App::new(settings_engine) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("failed to initialize QuickUrl: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&mut app, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
