//! File chooser collaborators.
//!
//! With the `dialog` feature the native chooser comes from `rfd`; otherwise
//! every prompt is treated as cancelled.

use tracing::info;

use crate::services::file_access_broker::{FilePrompt, PromptOutcome, PromptRequest};

/// Native single-file chooser.
#[cfg(feature = "dialog")]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePrompt;

#[cfg(feature = "dialog")]
impl FilePrompt for NativePrompt {
    fn choose_file(&self, request: &PromptRequest) -> PromptOutcome {
        let mut dialog = rfd::FileDialog::new().set_title(request.message.as_str());
        if let Some(dir) = &request.directory {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = &request.file_name {
            dialog = dialog.set_file_name(name.as_str());
        }
        // rfd's pick_file is single-file and excludes directories.
        match dialog.pick_file() {
            Some(path) => PromptOutcome::Selected(path),
            None => PromptOutcome::Cancelled,
        }
    }
}

/// Chooser for environments without a display; never selects anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessPrompt;

impl FilePrompt for HeadlessPrompt {
    fn choose_file(&self, request: &PromptRequest) -> PromptOutcome {
        info!(message = %request.message, "No file chooser available");
        PromptOutcome::Cancelled
    }
}

/// The best chooser this build supports.
pub fn default_prompt() -> Box<dyn FilePrompt> {
    #[cfg(feature = "dialog")]
    {
        Box::new(NativePrompt)
    }
    #[cfg(not(feature = "dialog"))]
    {
        Box::new(HeadlessPrompt)
    }
}
