//! Configuration for the huffcode console tool.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//! The tool works with ZERO arguments: with no input file it encodes a
//! reproducible generated sample, and the seed is printed so runs can be
//! repeated.

use log::LevelFilter;
use std::path::PathBuf;

/// Which of the two console operations to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read the corpus, print its encoded bit-string and compression report
    Encode,
    /// Rebuild the session tree from the corpus, decode an encoded bit-string
    Decode,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Operation to perform
    pub mode: Mode,

    /// Corpus file (None = generate a sample)
    pub input_file: Option<PathBuf>,

    /// Encoded bit-string file: written in encode mode, read in decode mode
    /// (decode falls back to stdin when absent)
    pub bits_file: Option<PathBuf>,

    /// Seed for sample generation
    pub seed: u64,

    /// Size of the generated sample corpus
    pub sample_bytes: usize,

    /// Log level for the terminal logger
    pub verbosity: LevelFilter,

    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no `--seed` is provided, a time-based seed is used (and printed
    /// via `print` so the run is reproducible).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode = Mode::Encode;
        let mut input_file: Option<PathBuf> = None;
        let mut bits_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut verbosity = LevelFilter::Warn;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--encode" => {
                    mode = Mode::Encode;
                }
                "--decode" => {
                    mode = Mode::Decode;
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--bits" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--bits requires a path".to_string());
                    }
                    bits_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--quiet" => {
                    verbosity = LevelFilter::Off;
                }
                "--verbose" => {
                    verbosity = LevelFilter::Debug;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or_default()
        });

        Ok(Config {
            mode,
            input_file,
            bits_file,
            seed,
            sample_bytes: sample_bytes.unwrap_or(4096),
            verbosity,
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        println!(
            "Corpus: {}",
            self.input_file
                .as_ref()
                .map_or("(generate sample)".to_string(), |p| p.display().to_string())
        );
        println!(
            "Bits file: {}",
            self.bits_file
                .as_ref()
                .map_or("(stdout/stdin)".to_string(), |p| p.display().to_string())
        );
        println!("Seed: {}", self.seed);
        println!("Sample size: {} bytes", self.sample_bytes);
        println!();
    }
}

fn print_help() {
    println!("huffcode: console Huffman compression");
    println!();
    println!("USAGE:");
    println!("    huffcode [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --encode                Encode the corpus (default)");
    println!("    --decode                Decode an encoded bit-string");
    println!();
    println!("    --in <PATH>             Corpus file (default: generate sample)");
    println!("    --bits <PATH>           Encoded bit-string file: written when");
    println!("                            encoding, read when decoding (default:");
    println!("                            stdout / prompt on stdin)");
    println!();
    println!("    --seed <N>              Seed for the generated sample");
    println!("    --sample-bytes <N>      Generated sample size (default: 4096)");
    println!();
    println!("    --quiet                 Disable logging");
    println!("    --verbose               Debug logging");
    println!("    --print-config          Print resolved configuration");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffcode                               # Encode a generated sample");
    println!("    huffcode --in text.txt                 # Encode a file");
    println!("    huffcode --in text.txt --bits out.bits # Save the bit-string");
    println!("    huffcode --decode --in text.txt --bits out.bits");
    println!();
}
