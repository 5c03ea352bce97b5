//! Command-line frame packer.
//!
//! Collects the frame files of a directory, joins and compresses them, and
//! writes the blob to the given output path. Meant to run from build scripts,
//! so the process status is the whole contract: 0 on success, 1 on any
//! failure. Diagnostics go to stderr only.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "framepack",
    about = "Pack a directory of animation frames into a compressed blob",
    version
)]
struct Cli {
    /// Directory holding the .txt frame files
    frames_dir: PathBuf,

    /// Destination file for the compressed blob
    output_file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Build scripts expect status 1 for bad invocations; clap's default
    // usage-error status is 2, so parse failures are mapped by hand.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                // --help and --version are not failures.
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let summary = framepack::pack_directory(&cli.frames_dir, &cli.output_file)?;
    tracing::info!(
        "packed {} frames into {} ({} -> {} bytes)",
        summary.frames,
        cli.output_file.display(),
        summary.joined_bytes,
        summary.packed_bytes
    );
    Ok(())
}
