use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use runlen::{compress, decompress};

/// Runlen: run-length compression for text
///
/// Encodes runs of repeated characters as `<symbol><count>` tokens
/// ("AAAABBBCCDAA" becomes "A4B3C2D1A2") and decodes them back.
#[derive(Parser, Debug)]
#[command(name = "runlen")]
#[command(author, version, about = "Run-length compression for text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compress text into run-length tokens.
    ///
    /// The input alphabet must not contain ASCII digits; those carry the run
    /// counts in the encoded form.
    Compress {
        #[command(flatten)]
        io: IoArgs,

        /// Print a compression summary to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Expand run-length tokens back into text.
    Decompress {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Text to process (reads --input or stdin when omitted)
    text: Option<String>,

    /// Input file path
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compress { io, stats } => {
            let input = read_input(&io)?;
            let encoded = compress(&input).context("Compression failed")?;
            if stats {
                print_stats(&input, &encoded);
            }
            write_output(&io, &encoded)
        }
        Commands::Decompress { io } => {
            let encoded = read_input(&io)?;
            let decoded = decompress(&encoded).context("Decompression failed")?;
            write_output(&io, &decoded)
        }
    }
}

fn read_input(io: &IoArgs) -> Result<String> {
    if let Some(text) = &io.text {
        return Ok(text.clone());
    }

    let raw = if let Some(path) = &io.input {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    };

    // Strip one trailing line ending so piped text round-trips cleanly.
    let stripped = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(&raw);
    Ok(stripped.to_string())
}

fn write_output(io: &IoArgs, result: &str) -> Result<()> {
    match &io.output {
        Some(path) => fs::write(path, result)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            println!("{result}");
            Ok(())
        }
    }
}

fn print_stats(input: &str, encoded: &str) {
    let input_chars = input.chars().count();
    let encoded_chars = encoded.chars().count();
    eprintln!("\n📊 Compression Summary");
    eprintln!("  • Input: {input_chars} chars");
    eprintln!("  • Output: {encoded_chars} chars");
    eprintln!(
        "  • Ratio: {:.2}x",
        input_chars as f64 / encoded_chars as f64
    );
}
