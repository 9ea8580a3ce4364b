// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! User interaction abstraction layer.
//!
//! The merge flow never talks to a windowing toolkit directly. It asks a
//! [`Dialogs`] implementation for files and confirmations, so the same
//! flow runs against native OS dialogs or a scripted stand-in in tests.

pub mod native;

use std::path::PathBuf;

pub use native::NativeDialogs;

/// Title of the multi-select open dialog
pub const OPEN_TITLE: &str = "Select MP3 Files to Merge";

/// Title of the save dialog
pub const SAVE_TITLE: &str = "Save Merged MP3 File As";

/// Yes/no questions asked during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Shuffle the selected files before merging?
    Randomize,
    /// Replace the existing output file?
    Overwrite,
}

impl Prompt {
    /// Dialog window title
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::Randomize => "Randomize Order",
            Prompt::Overwrite => "Overwrite Confirmation",
        }
    }

    /// Question shown to the user
    pub fn question(&self) -> &'static str {
        match self {
            Prompt::Randomize => "Do you want to randomize the order of the files?",
            Prompt::Overwrite => "File already exists. Overwrite?",
        }
    }
}

/// Trait for interactive dialog implementations.
///
/// Every method blocks until the user responds.
pub trait Dialogs {
    /// Let the user pick one or more files.
    ///
    /// # Returns
    /// * `Some(paths)` in the order the dialog reports them (possibly empty)
    /// * `None` if the dialog was cancelled
    fn select_input_files(&mut self, title: &str) -> Option<Vec<PathBuf>>;

    /// Ask a yes/no question. Returns `true` only for an explicit "yes".
    fn confirm(&mut self, prompt: Prompt) -> bool;

    /// Let the user choose where to save, pre-filling `default_name`.
    ///
    /// # Returns
    /// * `Some(path)` for the chosen location
    /// * `None` if the dialog was cancelled
    fn select_output_file(&mut self, title: &str, default_name: &str) -> Option<PathBuf>;
}
