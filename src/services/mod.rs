// QuickUrl services
// Services provide persistence, local file access, settings and logging.

pub mod file_access_broker;
pub mod logging;
pub mod settings_engine;
pub mod storage_service;
