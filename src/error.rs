//! Error types for the frame packing pipeline.

use std::io;
use std::path::PathBuf;

/// Errors produced while collecting, joining, compressing, or writing frames.
///
/// Every variant is fatal: the pipeline aborts on the first error, never
/// retries, and never leaves partial output behind.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// The frames directory could not be opened or enumerated
    #[error("failed to scan frames directory {}", dir.display())]
    ScanDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory was readable but held no frame files
    #[error("no frame files found in {}", dir.display())]
    NoFrames { dir: PathBuf },

    /// A selected frame file could not be fully read
    #[error("failed to read frame {}", path.display())]
    ReadFrame {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The joined payload size does not fit in usize
    #[error("joined frame size overflows the address space")]
    SizeOverflow,

    /// The joined payload buffer could not be allocated
    #[error("failed to allocate {0} bytes for the joined payload")]
    Alloc(usize),

    /// The DEFLATE encoder reported a failure
    #[error("deflate compression failed")]
    Compress(#[source] io::Error),

    /// The destination could not be created, written, or renamed into place
    #[error("failed to write output {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
