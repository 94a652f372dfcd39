//! Configuration for the huffpack command-line tool.
//!
//! Parses a subcommand plus flags by hand; the surface is small enough
//! that a dependency-free argument loop stays readable.

use std::path::PathBuf;

/// What the tool has been asked to do.
#[derive(Debug, Clone)]
pub enum Command {
    /// Compress `input` into a container file at `output`.
    Compress { input: PathBuf, output: PathBuf },

    /// Decompress the container file at `input` into `output`.
    Decompress { input: PathBuf, output: PathBuf },

    /// Generate deterministic sample data for exercising the codec.
    GenSample {
        output: PathBuf,
        seed: u64,
        size_bytes: usize,
    },
}

/// Complete configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,

    /// Whether to print the run summary (sizes, ratio, elapsed time).
    pub print_summary: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (without argv[0]).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut iter = args.iter();
        let command = match iter.next().map(String::as_str) {
            Some("compress") => "compress",
            Some("decompress") => "decompress",
            Some("gen-sample") => "gen-sample",
            Some("--help") | Some("-h") => {
                print_help();
                std::process::exit(0);
            }
            Some(other) => return Err(format!("unknown command: {other}")),
            None => return Err("missing command (try --help)".to_string()),
        };

        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut size_bytes: Option<usize> = None;
        let mut print_summary = true;
        let mut positionals: Vec<PathBuf> = Vec::new();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--in" => {
                    let value = iter.next().ok_or("--in requires a path")?;
                    input = Some(PathBuf::from(value));
                }
                "--out" => {
                    let value = iter.next().ok_or("--out requires a path")?;
                    output = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = iter.next().ok_or("--seed requires a number")?;
                    seed = Some(value.parse().map_err(|_| "invalid seed")?);
                }
                "--size" => {
                    let value = iter.next().ok_or("--size requires a number")?;
                    size_bytes = Some(value.parse().map_err(|_| "invalid size")?);
                }
                "--quiet" | "-q" => {
                    print_summary = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other if !other.starts_with('-') => {
                    positionals.push(PathBuf::from(other));
                }
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        // Positional paths fill in whatever --in/--out didn't.
        let mut positionals = positionals.into_iter();
        let input = input.or_else(|| positionals.next());
        let output = output.or_else(|| positionals.next());

        let command = match command {
            "compress" => Command::Compress {
                input: input.ok_or("compress requires an input path")?,
                output: output.ok_or("compress requires an output path")?,
            },
            "decompress" => Command::Decompress {
                input: input.ok_or("decompress requires an input path")?,
                output: output.ok_or("decompress requires an output path")?,
            },
            "gen-sample" => Command::GenSample {
                output: output
                    .or(input)
                    .ok_or("gen-sample requires an output path")?,
                seed: seed.unwrap_or_else(|| {
                    use std::time::{SystemTime, UNIX_EPOCH};
                    SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .map(|t| t.as_millis() as u64)
                        .unwrap_or(0)
                }),
                size_bytes: size_bytes.unwrap_or(256 * 1024),
            },
            _ => unreachable!("command validated above"),
        };

        Ok(Config {
            command,
            print_summary,
        })
    }
}

fn print_help() {
    println!("huffpack: lossless file compression using canonical Huffman coding");
    println!();
    println!("USAGE:");
    println!("    huffpack <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    compress <IN> <OUT>     Compress IN into container file OUT");
    println!("    decompress <IN> <OUT>   Restore the original bytes from IN");
    println!("    gen-sample <OUT>        Write deterministic sample data to OUT");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>             Input file (alternative to positional)");
    println!("    --out <PATH>            Output file (alternative to positional)");
    println!("    --seed <N>              Sample generation seed (default: time-based)");
    println!("    --size <N>              Sample size in bytes (default: 262144)");
    println!("    --quiet, -q             Suppress the run summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack compress book.txt book.hpk");
    println!("    huffpack decompress book.hpk restored.txt");
    println!("    huffpack gen-sample sample.bin --seed 42 --size 1048576");
}
