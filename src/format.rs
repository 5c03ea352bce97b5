//! Frame pack binary format.
//!
//! A pack is the raw-DEFLATE compression of every frame joined by a single
//! separator byte. There is no magic, no length prefix, and no checksum -
//! the blob is the compressed payload and nothing else.
//!
//! # Layout
//! ```text
//! decompressed payload:
//!   frame_1 || 0x01 || frame_2 || 0x01 || ... || 0x01 || frame_N
//!
//! separators:  exactly N - 1, strictly between frames
//!              (never before the first, never after the last)
//! compression: raw DEFLATE, default level, 32 KiB window
//!              (no zlib/gzip header or trailer)
//! ```
//!
//! Consumers inflate with raw-DEFLATE parameters (negative window bits in
//! zlib terms) and split the payload on [`FRAME_SEPARATOR`]. The separator
//! is not escaped: a frame whose content contains `0x01` is out of contract
//! and will corrupt the split.

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::PackError;

/// Byte inserted between consecutive frames in the joined payload.
pub const FRAME_SEPARATOR: u8 = 0x01;

/// Extension (without dot) a file must carry to be collected as a frame.
pub const FRAME_EXTENSION: &str = "txt";

/// A single frame loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// File name within the frames directory (not the full path).
    pub name: String,
    /// Raw frame bytes, no decoding or newline translation.
    pub data: Vec<u8>,
}

/// Exact size of the joined payload: the sum of all frame lengths plus one
/// separator per adjacent pair (zero separators for a single frame or an
/// empty set).
///
/// The summation is overflow-checked so a pathological frame set fails
/// cleanly instead of wrapping.
pub fn joined_len(frames: &[Frame]) -> Result<usize, PackError> {
    checked_joined_len(frames.iter().map(|frame| frame.data.len()))
}

fn checked_joined_len(mut lens: impl ExactSizeIterator<Item = usize>) -> Result<usize, PackError> {
    let separators = lens.len().saturating_sub(1);
    lens.try_fold(separators, |total, len| total.checked_add(len))
        .ok_or(PackError::SizeOverflow)
}

/// Join frame contents with [`FRAME_SEPARATOR`] strictly between frames.
///
/// The buffer is allocated once at its exact final size. A single frame
/// joins to its own bytes; an empty set joins to an empty buffer. Frame
/// content is copied verbatim - a frame containing the separator byte will
/// corrupt the consumer's split (known limitation, no escaping).
pub fn join_frames(frames: &[Frame]) -> Result<Vec<u8>, PackError> {
    let total = joined_len(frames)?;

    let mut joined = Vec::new();
    joined
        .try_reserve_exact(total)
        .map_err(|_| PackError::Alloc(total))?;

    for (i, frame) in frames.iter().enumerate() {
        if i > 0 {
            joined.push(FRAME_SEPARATOR);
        }
        joined.extend_from_slice(&frame.data);
    }

    debug_assert_eq!(joined.len(), total);
    Ok(joined)
}

/// Compress the joined payload to a raw DEFLATE stream.
///
/// Default compression level, no container header or trailing checksum.
/// The consumer must inflate with matching raw parameters or decoding fails.
pub fn compress_payload(payload: &[u8]) -> Result<Vec<u8>, PackError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).map_err(PackError::Compress)?;
    encoder.finish().map_err(PackError::Compress)
}
