//! Status-bar menu projection of the entry list.

use crate::types::entry::ListEntry;
use crate::types::menu::MenuItem;
use crate::types::settings::MenuSettings;

pub const MANAGE_SHORTCUT: char = ',';
pub const QUIT_SHORTCUT: char = 'q';

/// Builds the menu rows for `entries`, followed by the management items.
pub fn build_menu(entries: &[ListEntry], settings: &MenuSettings) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = entries
        .iter()
        .map(|entry| {
            if entry.is_divider {
                MenuItem::Separator
            } else {
                MenuItem::Link {
                    id: entry.id,
                    title: entry.title.clone(),
                    target: entry.target.clone(),
                }
            }
        })
        .collect();

    if settings.show_manage_item || settings.show_quit_item {
        items.push(MenuItem::Separator);
    }
    if settings.show_manage_item {
        items.push(MenuItem::Manage {
            shortcut: MANAGE_SHORTCUT,
        });
    }
    if settings.show_quit_item {
        items.push(MenuItem::Quit {
            shortcut: QUIT_SHORTCUT,
        });
    }
    items
}
