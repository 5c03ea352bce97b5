//! Frame collection: directory scan, ordering, and loading.
//!
//! The collector turns a flat directory into an ordered frame set. Only
//! regular files named `*.txt` participate; subdirectories and every other
//! extension are ignored. Ordering is plain byte comparison of the file
//! names, so the set is identical across platforms and reruns regardless of
//! directory enumeration order.

use std::path::{Path, PathBuf};

use crate::error::PackError;
use crate::format::{Frame, FRAME_EXTENSION};

/// Collect every frame file in `dir`, ordered byte-wise by file name.
///
/// The whole set is read into memory before returning: if any selected file
/// cannot be fully read, the call fails and no partial set is produced.
/// An empty result is an error of its own - a pack of zero frames is not a
/// valid build input.
///
/// Note the ordering is byte-wise, not numeric: `frame10.txt` sorts before
/// `frame2.txt`. Zero-pad frame numbers when generating inputs.
pub fn collect_frames(dir: &Path) -> Result<Vec<Frame>, PackError> {
    let entries = std::fs::read_dir(dir).map_err(|source| PackError::ScanDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut selected: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PackError::ScanDir {
            dir: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !is_frame_file(&path) {
            continue;
        }
        // Names must be valid UTF-8 to participate in the byte-wise order.
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        selected.push((name, path));
    }

    if selected.is_empty() {
        return Err(PackError::NoFrames {
            dir: dir.to_path_buf(),
        });
    }

    // String ordering is byte-wise lexicographic - the pack order contract.
    selected.sort_by(|a, b| a.0.cmp(&b.0));

    let mut frames = Vec::with_capacity(selected.len());
    for (name, path) in selected {
        let data = std::fs::read(&path).map_err(|source| PackError::ReadFrame { path, source })?;
        tracing::debug!("frame {} ({} bytes)", name, data.len());
        frames.push(Frame { name, data });
    }

    Ok(frames)
}

/// A `.txt` file with a non-empty stem (`extension()` is `None` for a bare
/// `.txt`). `is_file` follows symlinks, so a link to a regular file counts.
fn is_frame_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == FRAME_EXTENSION)
}
