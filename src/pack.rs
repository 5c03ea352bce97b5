//! Pack pipeline: collect, join, compress, persist.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::collect::collect_frames;
use crate::error::PackError;
use crate::format::{compress_payload, join_frames};

/// Byte counts reported by a successful pack run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackSummary {
    /// Number of frames packed.
    pub frames: usize,
    /// Size of the joined payload before compression.
    pub joined_bytes: usize,
    /// Size of the compressed blob written to disk.
    pub packed_bytes: usize,
}

/// Pack every frame file in `frames_dir` into a compressed blob at `output`.
///
/// Runs the whole pipeline in order: collect and sort the frames, join them
/// with the separator, compress to raw DEFLATE, write the blob. Any stage's
/// failure aborts the run; the destination is only ever created on full
/// success, so a failed run cannot leave a truncated or stale-looking
/// output behind.
pub fn pack_directory(frames_dir: &Path, output: &Path) -> Result<PackSummary, PackError> {
    let frames = collect_frames(frames_dir)?;
    tracing::info!(
        "collected {} frames from {}",
        frames.len(),
        frames_dir.display()
    );

    let joined = join_frames(&frames)?;
    let blob = compress_payload(&joined)?;
    write_blob(output, &blob)?;

    Ok(PackSummary {
        frames: frames.len(),
        joined_bytes: joined.len(),
        packed_bytes: blob.len(),
    })
}

/// Write `blob` to `path` atomically.
///
/// The bytes go to a temporary file in the destination's directory, which is
/// renamed over `path` once fully written. An existing file at `path` is
/// replaced in one step; a failure at any point leaves it untouched.
pub fn write_blob(path: &Path, blob: &[u8]) -> Result<(), PackError> {
    // Same directory as the destination so the final rename never crosses a
    // filesystem boundary.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let output_error = |source: std::io::Error| PackError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(output_error)?;
    tmp.write_all(blob).map_err(output_error)?;
    tmp.persist(path).map_err(|err| output_error(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;

    fn inflate(blob: &[u8]) -> Vec<u8> {
        let mut decoder = flate2::read::DeflateDecoder::new(blob);
        let mut payload = Vec::new();
        decoder.read_to_end(&mut payload).unwrap();
        payload
    }

    #[test]
    fn packs_two_frames_with_separator() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"AA").unwrap();
        std::fs::write(dir.path().join("b.txt"), b"BB").unwrap();
        let output = dir.path().join("frames.bin");

        let summary = pack_directory(dir.path(), &output).unwrap();
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.joined_bytes, 5); // "AA" + sep + "BB"

        let blob = std::fs::read(&output).unwrap();
        assert_eq!(blob.len(), summary.packed_bytes);
        assert_eq!(inflate(&blob), b"AA\x01BB");
    }

    #[test]
    fn single_frame_payload_has_no_separator() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("z.txt"), b"Z").unwrap();
        std::fs::write(dir.path().join("a.png"), b"ignored").unwrap();
        let output = dir.path().join("frames.bin");

        let summary = pack_directory(dir.path(), &output).unwrap();
        assert_eq!(summary.frames, 1);
        assert_eq!(summary.joined_bytes, 1);

        let payload = inflate(&std::fs::read(&output).unwrap());
        assert_eq!(payload, b"Z");
    }

    #[test]
    fn empty_directory_fails_before_creating_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("frames.bin");

        let err = pack_directory(dir.path(), &output).unwrap_err();
        assert!(matches!(err, PackError::NoFrames { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn repacking_unchanged_input_is_byte_identical() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"alpha").unwrap();
        std::fs::write(dir.path().join("b.txt"), b"beta").unwrap();
        let first = dir.path().join("first.bin");
        let second = dir.path().join("second.bin");

        pack_directory(dir.path(), &first).unwrap();
        pack_directory(dir.path(), &second).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn write_blob_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"stale and longer than the new blob").unwrap();

        write_blob(&path, b"fresh").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"fresh");
    }

    #[test]
    fn write_blob_into_missing_directory_fails_with_output_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.bin");

        let err = write_blob(&path, b"blob").unwrap_err();
        assert!(matches!(err, PackError::WriteOutput { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn failed_write_leaves_no_stray_temp_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"A").unwrap();
        let bad_output = dir.path().join("missing").join("frames.bin");

        pack_directory(dir.path(), &bad_output).unwrap_err();

        // Only the frame file remains in the directory.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["a.txt"]);
    }
}
