use clap::Parser;
use huffarc::{
    compress_file,
    config::ARCHIVE_EXTENSION,
    io_utils::huff_cli_error,
    path::archive_path,
};
use std::path::PathBuf;

/// Compress a single file into a Huffman archive.
#[derive(Parser)]
struct Args {
    /// File to compress
    input: PathBuf,
    /// Archive path (defaults to the input name plus `.huf`)
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let output = args
        .output
        .unwrap_or_else(|| archive_path(&args.input, ARCHIVE_EXTENSION));
    let stats = compress_file(&args.input, &output).map_err(|e| huff_cli_error(&args.input, e))?;
    eprintln!(
        "{} -> {} ({} -> {} bytes, {:.2}%)",
        args.input.display(),
        output.display(),
        stats.input_bytes,
        stats.output_bytes,
        stats.ratio()
    );
    Ok(())
}
