use clap::Parser;
use huffarc::{
    config::Config,
    extract_file,
    io_utils::{extension_error, huff_cli_error},
    path::is_archive,
};
use std::path::PathBuf;

/// Extract a Huffman archive created by the compressor.
#[derive(Parser)]
struct Args {
    /// Input .huf file
    input: PathBuf,
    /// Output file path (derived from the stored extension if omitted)
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
    let config = Config::default();
    if !is_archive(&args.input, &config.archive_extension) {
        return Err(extension_error(&args.input, &config.archive_extension).into());
    }
    let (dest, stats) = extract_file(&args.input, args.output.as_deref(), &config)
        .map_err(|e| huff_cli_error(&args.input, e))?;
    eprintln!(
        "{} -> {} ({} bytes)",
        args.input.display(),
        dest.display(),
        stats.output_bytes
    );
    Ok(())
}
