// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MP3 merger.
//!
//! Concatenates user-selected MP3 files byte for byte into a single
//! output file, optionally in shuffled order. Interaction goes through
//! the [`dialogs::Dialogs`] trait so the flow can run headless.

pub mod app;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod merge;
pub mod playlist;

pub use app::{run, Abort, Outcome};
pub use config::MergerConfig;
pub use dialogs::{Dialogs, NativeDialogs, Prompt};
pub use error::{MergeError, ValidationError};
pub use merge::{merge_files, merge_into, MergeReport};
pub use playlist::{is_mp3, Playlist};
