// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The interactive merge flow.
//!
//! Select inputs, validate, optionally shuffle, choose an output, guard
//! against overwriting, merge. Every step before the merge can end the
//! run without touching the filesystem.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::MergerConfig;
use crate::dialogs::{Dialogs, Prompt, OPEN_TITLE, SAVE_TITLE};
use crate::error::{MergeError, ValidationError};
use crate::merge::{merge_files, MergeReport};
use crate::playlist::Playlist;

/// Why a run stopped before merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Abort {
    /// The open dialog was cancelled
    NoSelection,
    /// The selection was empty or contained a non-MP3 entry
    Invalid(ValidationError),
    /// The save dialog was cancelled
    NoOutput,
    /// The output exists and the user declined to replace it
    OverwriteDeclined,
}

impl Abort {
    /// Status line printed to the console
    pub fn message(&self) -> String {
        match self {
            Abort::NoSelection => "No files selected. Exiting.".to_string(),
            Abort::Invalid(ValidationError::Empty) => "No MP3 files selected. Exiting.".to_string(),
            Abort::Invalid(ValidationError::NotMp3 { name }) => {
                format!("Invalid file format: {}. Only MP3 files are allowed.", name)
            }
            Abort::NoOutput => "Output file not selected. Exiting.".to_string(),
            Abort::OverwriteDeclined => "Operation cancelled. Exiting.".to_string(),
        }
    }
}

/// Result of a run that did not hit an I/O error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All inputs were written to `output`
    Merged {
        output: PathBuf,
        order: Vec<PathBuf>,
        report: MergeReport,
    },
    /// The run ended early; nothing was written
    Aborted(Abort),
}

impl Outcome {
    /// Status line printed to the console
    pub fn message(&self) -> String {
        match self {
            Outcome::Merged { .. } => "Files merged successfully.".to_string(),
            Outcome::Aborted(abort) => abort.message(),
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, Outcome::Merged { .. })
    }
}

/// RNG used for shuffling: seeded when the config asks for it
pub fn shuffle_rng(config: &MergerConfig) -> StdRng {
    match config.shuffle_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the whole flow against the given dialogs.
///
/// Aborts are reported as `Ok(Outcome::Aborted(..))`. Only a failure
/// while writing the output is an `Err`, in which case the output file
/// may be incomplete.
pub fn run<D, R>(dialogs: &mut D, config: &MergerConfig, rng: &mut R) -> Result<Outcome, MergeError>
where
    D: Dialogs + ?Sized,
    R: Rng + ?Sized,
{
    let selected = match dialogs.select_input_files(OPEN_TITLE) {
        Some(files) => files,
        None => return Ok(aborted(Abort::NoSelection)),
    };
    info!(count = selected.len(), "files selected");

    let mut playlist = match Playlist::new(selected) {
        Ok(playlist) => playlist,
        Err(err) => return Ok(aborted(Abort::Invalid(err))),
    };

    if dialogs.confirm(Prompt::Randomize) {
        playlist.shuffle(rng);
        info!("playlist shuffled");
    }

    let output = match dialogs.select_output_file(SAVE_TITLE, &config.default_output_name) {
        Some(path) => path,
        None => return Ok(aborted(Abort::NoOutput)),
    };

    if output.exists() && !dialogs.confirm(Prompt::Overwrite) {
        return Ok(aborted(Abort::OverwriteDeclined));
    }

    let report = merge_files(playlist.paths(), &output)?;

    Ok(Outcome::Merged {
        output,
        order: playlist.into_paths(),
        report,
    })
}

fn aborted(abort: Abort) -> Outcome {
    info!(reason = ?abort, "run aborted");
    Outcome::Aborted(abort)
}
