// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for validation and merging.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a selection is rejected before any file is touched
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The dialog returned no files
    #[error("no MP3 files selected")]
    Empty,
    /// An entry does not carry the `.mp3` suffix
    #[error("invalid file format: {name}")]
    NotMp3 {
        /// Display name of the offending entry
        name: String,
    },
}

/// I/O failures raised while concatenating files
#[derive(Debug, Error)]
pub enum MergeError {
    /// The output path names one of the inputs
    #[error("output file {path:?} is also one of the inputs")]
    OutputIsInput { path: PathBuf },

    #[error("failed to create output file {path:?}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open input file {path:?}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input or writing the output failed mid-copy
    #[error("failed to copy {path:?} into output")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to flush output file {path:?}")]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    /// Path the failure is attributed to
    pub fn path(&self) -> &PathBuf {
        match self {
            MergeError::OutputIsInput { path }
            | MergeError::CreateOutput { path, .. }
            | MergeError::OpenInput { path, .. }
            | MergeError::Copy { path, .. }
            | MergeError::Flush { path, .. } => path,
        }
    }
}
