use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use huffarc::config::DEFAULT_FLUSH_BATCH;
use huffarc::io_utils::cli_hint;
use huffarc::stats::format_elapsed;
use huffarc::{run_batch, Action, Config};
use indicatif::{ProgressBar, ProgressStyle};

/// Compress files with Huffman coding, or extract `.huf` archives.
///
/// Each path is handled on its own: archives are extracted next to
/// themselves, anything else is compressed to `<name>.huf`.
#[derive(Parser)]
#[command(name = "huffarc", version)]
struct Args {
    /// Files to compress or extract
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Print the batch summary as JSON
    #[arg(long)]
    json: bool,
    /// Do not draw a progress bar
    #[arg(long)]
    quiet: bool,
    /// Decoded bytes buffered before each write
    #[arg(long, default_value_t = DEFAULT_FLUSH_BATCH)]
    flush_batch: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = Config::default().with_flush_batch(args.flush_batch);
    let start = Instant::now();

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(args.paths.len() as u64)
    };
    if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {wide_msg}") {
        bar.set_style(style);
    }
    let say = |line: String| {
        if bar.is_hidden() {
            eprintln!("{line}");
        } else {
            bar.println(line);
        }
    };

    let total = args.paths.len();
    let mut index = 0usize;
    let stats = run_batch(&args.paths, &config, |outcome| {
        index += 1;
        let verb = match outcome.action {
            Action::Compress => "Archiving",
            Action::Extract => "Extracting",
        };
        let counter = if total > 1 {
            format!("({index}/{total}) ")
        } else {
            String::new()
        };
        let status = match &outcome.result {
            Ok((dest, _)) => format!("done -> {}", dest.display()),
            Err(e) => cli_hint(&outcome.input, e),
        };
        say(format!(
            ">> {counter}{verb} \"{}\" ........ {status}",
            outcome.input.display()
        ));
        bar.set_message(outcome.input.display().to_string());
        bar.inc(1);
    });
    bar.finish_and_clear();

    let elapsed = start.elapsed();
    if args.json {
        let out = serde_json::json!({
            "batch": stats,
            "elapsed_ms": elapsed.as_millis() as u64,
        });
        match serde_json::to_string_pretty(&out) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        for line in stats.summary_lines() {
            println!(">> {line}");
        }
        println!("{}", format_elapsed(elapsed));
    }

    if stats.failed() > 0 {
        std::process::exit(1);
    }
}
