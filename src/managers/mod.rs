// QuickUrl state managers
// Managers own mutable state: the entry list and its menu projection.

pub mod list_manager;
pub mod menu_builder;
