//! huffcode: console front-end for the Huffman engine.
//!
//! The engine itself never touches files or the console; this binary reads
//! the corpus, builds the session tree and code table once, and runs one of
//! the two flows:
//! - encode: print (or save) the corpus's encoded bit-string and report the
//!   compression ratio against an 8-bit-per-symbol baseline
//! - decode: rebuild the session from the same corpus, then decode a
//!   bit-string from a file or an interactive prompt

mod config;
mod input_gen;

use config::{Config, Mode};
use huffcode_core::{
    codebook, decode::decode, encode::encode, freq::FrequencyTable, report::report,
};
use log::{debug, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::io::{BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    TermLogger::init(
        config.verbosity,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    if config.print_config {
        config.print();
    }

    if let Err(error) = run(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> huffcode_core::Result<()> {
    let corpus = load_corpus(config)?;
    info!("corpus: {} bytes", corpus.len());

    let freqs = FrequencyTable::from_bytes(&corpus);
    debug!(
        "{} distinct symbols, {} counted occurrences",
        freqs.distinct_count(),
        freqs.total_count()
    );

    let (tree, table) = codebook::build(&freqs)?;

    match config.mode {
        Mode::Encode => {
            let bits = encode(&table, &corpus)?;

            match &config.bits_file {
                Some(path) => {
                    std::fs::write(path, &bits)?;
                    println!("Encoded text written to {}", path.display());
                }
                None => {
                    println!("Encoded text:");
                    println!("{bits}");
                }
            }

            let rep = report(&table, &corpus)?;
            println!();
            println!("Original size: {} bits", rep.original_bits);
            println!("Encoded size: {} bits", rep.encoded_bits);
            println!("Compression: {:.2}%", rep.reduction_percent());
        }
        Mode::Decode => {
            let bits = read_bits(config)?;
            let decoded = decode(&tree, bits.trim())?;

            println!("Decoded text:");
            println!("{}", String::from_utf8_lossy(&decoded));
        }
    }

    Ok(())
}

/// Read the session corpus: the input file, or a generated sample.
fn load_corpus(config: &Config) -> huffcode_core::Result<Vec<u8>> {
    match &config.input_file {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            info!(
                "no input file; generating {} sample bytes (seed {})",
                config.sample_bytes, config.seed
            );
            Ok(input_gen::generate_sample_text(
                config.seed,
                config.sample_bytes,
            ))
        }
    }
}

/// Read the encoded bit-string: the bits file, or one line from stdin.
fn read_bits(config: &Config) -> huffcode_core::Result<String> {
    match &config.bits_file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            print!("Enter encoded text: ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        }
    }
}
