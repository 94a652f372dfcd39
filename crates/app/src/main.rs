//! huffpack: command-line Huffman file compressor.
//!
//! Thin wrapper over `huffpack-core`: parse the command, run it, print
//! a short summary, exit non-zero on any error.

mod config;
mod input_gen;

use std::fs;
use std::path::Path;
use std::time::Instant;

use config::{Command, Config};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("huffpack: {message}");
            std::process::exit(1);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("huffpack: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> huffpack_core::Result<()> {
    let started = Instant::now();

    match &config.command {
        Command::Compress { input, output } => {
            huffpack_core::compress(input, output)?;
            if config.print_summary {
                print_summary("compressed", input, output, started);
            }
        }
        Command::Decompress { input, output } => {
            huffpack_core::decompress(input, output)?;
            if config.print_summary {
                print_summary("decompressed", input, output, started);
            }
        }
        Command::GenSample {
            output,
            seed,
            size_bytes,
        } => {
            input_gen::write_sample_file(output, *seed, *size_bytes)?;
            if config.print_summary {
                println!(
                    "generated {} bytes of sample data (seed {}) -> {}",
                    size_bytes,
                    seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

/// Print sizes, ratio, and elapsed time for a completed operation.
fn print_summary(verb: &str, input: &Path, output: &Path, started: Instant) {
    let input_bytes = file_len(input);
    let output_bytes = file_len(output);
    let elapsed = started.elapsed();

    println!(
        "{verb} {} ({input_bytes} bytes) -> {} ({output_bytes} bytes)",
        input.display(),
        output.display()
    );
    if input_bytes > 0 {
        println!(
            "ratio: {:.2}%  elapsed: {:.1?}",
            output_bytes as f64 / input_bytes as f64 * 100.0,
            elapsed
        );
    }
}

fn file_len(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
