// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Byte-level concatenation of input files.
//!
//! No MP3 frames are parsed: each input is copied verbatim, in order,
//! with nothing inserted between files. Consecutive MPEG audio frames
//! tolerate this in most players.
//!
//! Each input is opened, copied, and closed before the next one is
//! opened. The output stays open across the loop and is flushed once.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use same_file::is_same_file;
use tracing::{debug, info};

use crate::error::MergeError;

/// Summary of a completed merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeReport {
    /// Number of input files copied
    pub files: usize,
    /// Total bytes written to the output
    pub bytes: u64,
}

/// Copy every input, in order, into `writer`.
///
/// Returns the number of bytes copied. The writer is not flushed.
pub fn merge_into<W: Write + ?Sized>(inputs: &[PathBuf], writer: &mut W) -> Result<u64, MergeError> {
    let mut total = 0u64;

    for path in inputs {
        let file = File::open(path).map_err(|source| MergeError::OpenInput {
            path: path.clone(),
            source,
        })?;
        let mut reader = BufReader::new(file);

        let copied = io::copy(&mut reader, writer).map_err(|source| MergeError::Copy {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), bytes = copied, "copied input");
        total += copied;
    }

    Ok(total)
}

/// Concatenate `inputs` into a freshly created (or truncated) `output`.
///
/// On error the output may be left partially written.
pub fn merge_files<P: AsRef<Path>>(inputs: &[PathBuf], output: P) -> Result<MergeReport, MergeError> {
    let output = output.as_ref();
    ensure_output_not_input(inputs, output)?;

    let file = File::create(output).map_err(|source| MergeError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let bytes = merge_into(inputs, &mut writer)?;

    writer.flush().map_err(|source| MergeError::Flush {
        path: output.to_path_buf(),
        source,
    })?;

    info!(output = %output.display(), files = inputs.len(), bytes, "merge complete");
    Ok(MergeReport {
        files: inputs.len(),
        bytes,
    })
}

/// Refuse to truncate a file that is about to be read.
///
/// Identity is checked on the underlying file, so hard links and
/// symlinks to an input are caught as well as identical paths.
fn ensure_output_not_input(inputs: &[PathBuf], output: &Path) -> Result<(), MergeError> {
    // A missing output cannot alias an existing input.
    if !output.exists() {
        return Ok(());
    }

    for input in inputs {
        // An unreadable input fails later, at open time.
        if is_same_file(input, output).unwrap_or(false) {
            return Err(MergeError::OutputIsInput {
                path: output.to_path_buf(),
            });
        }
    }

    Ok(())
}
