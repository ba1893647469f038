use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod extract;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract framed payloads from an unpacked-bit capture.
    Extract(ExtractArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Extract(args) => extract::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Bit capture to read: one byte per bit, as written by an unpacked
    /// demodulator sink.
    pub path: PathBuf,
    /// JSON marker file: [{"offset": 0, "kind": "frame-start"}, ...].
    #[arg(long, value_name = "FILE")]
    pub markers: PathBuf,
    /// Bits delivered to the extractor per call.
    #[arg(long, default_value_t = 4096)]
    pub chunk_size: usize,
    /// Override the 8-byte access code (hex).
    #[arg(long, value_name = "HEX")]
    pub access_code: Option<String>,
    /// Upper bound on the declared payload size in bytes.
    #[arg(long)]
    pub max_frame_bytes: Option<usize>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
