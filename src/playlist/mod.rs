// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Validated, ordered list of input files.
//!
//! A [`Playlist`] can only be built from a non-empty selection in which
//! every entry carries a `.mp3` suffix (case-insensitive). Validation is
//! fail-fast: the first bad entry rejects the whole selection. After
//! construction the only permitted change is a whole-list shuffle.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ValidationError;

/// Suffix every input must end with (compared lowercased)
pub const MP3_SUFFIX: &str = ".mp3";

/// Check whether a path's file name ends in `.mp3`, ignoring case
pub fn is_mp3<P: AsRef<Path>>(path: P) -> bool {
    match path.as_ref().file_name() {
        Some(name) => name
            .to_string_lossy()
            .to_lowercase()
            .ends_with(MP3_SUFFIX),
        None => false,
    }
}

/// Name shown to the user for a rejected entry
fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Ordered, non-empty list of MP3 paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    paths: Vec<PathBuf>,
}

impl Playlist {
    /// Validate a selection, keeping its order
    pub fn new(paths: Vec<PathBuf>) -> Result<Self, ValidationError> {
        if paths.is_empty() {
            return Err(ValidationError::Empty);
        }

        if let Some(bad) = paths.iter().find(|p| !is_mp3(p)) {
            return Err(ValidationError::NotMp3 {
                name: display_name(bad),
            });
        }

        Ok(Self { paths })
    }

    /// Apply a uniform random permutation
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.paths.shuffle(rng);
    }

    /// Paths in merge order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of files (never zero)
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false for a validated playlist
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}
