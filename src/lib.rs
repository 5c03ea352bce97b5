//! Build-time animation frame packer.
//!
//! Joins the `.txt` frame files of a directory into a single payload and
//! compresses it into a blob the runtime can ship as one asset. Frames are
//! ordered by file name (byte-wise, so `frame10.txt` sorts before
//! `frame2.txt`) and joined with a `0x01` separator:
//!
//! ```text
//! frame_1 || 0x01 || frame_2 || 0x01 || ... || frame_N
//! ```
//!
//! The blob is a raw DEFLATE stream with no container header. Frame content
//! is passed through verbatim; a `0x01` byte inside a frame is
//! indistinguishable from a separator, so frames must not contain it.
//!
//! The usual entry point is [`pack_directory`], which runs the whole
//! pipeline and reports what it wrote:
//!
//! ```no_run
//! use std::path::Path;
//!
//! let summary = framepack::pack_directory(Path::new("frames"), Path::new("frames.bin"))?;
//! println!("{} frames, {} bytes", summary.frames, summary.packed_bytes);
//! # Ok::<(), framepack::PackError>(())
//! ```

pub mod collect;
pub mod error;
pub mod format;
pub mod pack;

pub use collect::collect_frames;
pub use error::PackError;
pub use format::{compress_payload, join_frames, joined_len, Frame, FRAME_EXTENSION, FRAME_SEPARATOR};
pub use pack::{pack_directory, write_blob, PackSummary};
