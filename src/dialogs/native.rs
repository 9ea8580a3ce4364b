// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Native OS dialogs via `rfd`.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::debug;

use super::{Dialogs, Prompt};

/// Blocking native dialogs
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl NativeDialogs {
    pub fn new() -> Self {
        Self
    }
}

impl Dialogs for NativeDialogs {
    fn select_input_files(&mut self, title: &str) -> Option<Vec<PathBuf>> {
        // Unfiltered; the suffix rule is enforced by validation.
        let files = FileDialog::new().set_title(title).pick_files();
        debug!(count = files.as_ref().map(Vec::len), "input dialog closed");
        files
    }

    fn confirm(&mut self, prompt: Prompt) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(prompt.title())
            .set_description(prompt.question())
            .set_buttons(MessageButtons::YesNo)
            .show();
        debug!(?prompt, ?result, "confirmation answered");
        result == MessageDialogResult::Yes
    }

    fn select_output_file(&mut self, title: &str, default_name: &str) -> Option<PathBuf> {
        let path = FileDialog::new()
            .set_title(title)
            .set_file_name(default_name)
            .save_file();
        debug!(?path, "save dialog closed");
        path
    }
}
