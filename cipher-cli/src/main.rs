#![deny(missing_docs)]
//! A command-line interface for the classical cipher tool.

use cipher_core::caesar::{Caesar, Direction};
use cipher_core::keygen;
use cipher_core::vigenere::Vigenere;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encode text from stdin with a Vigenère keyword\necho 'attack at dawn' | cipher-cli encode --keyword lemon\n\n# Decode a file encoded with a Caesar offset of 3\ncipher-cli decode --offset 3 --input cipher.txt --output plain.txt\n\n# Give the Caesar offset as a letter ('d' shifts by 3)\ncipher-cli encode --letter d --input plain.txt\n\n# Generate a random 12-letter keyword\ncipher-cli keygen --length 12"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with the selected cipher
    Encode(TransformArgs),
    /// Decode text with the selected cipher
    Decode(TransformArgs),
    /// Generate a random lowercase keyword
    Keygen {
        /// The number of letters in the keyword
        #[arg(short, long, default_value_t = 8)]
        length: usize,
    },
}

#[derive(Args)]
struct TransformArgs {
    #[command(flatten)]
    key: KeyArgs,

    /// Path to a file to read the text from. If omitted, reads standard input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to a file to write the result to. If omitted, writes standard output.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Exactly one cipher must be selected per invocation.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Use a Vigenère cipher with this keyword
    #[arg(short, long, value_name = "KEYWORD")]
    keyword: Option<String>,

    /// Use a Caesar cipher with this integer offset (negative values wrap backwards)
    #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
    offset: Option<i32>,

    /// Use a Caesar cipher with the alphabet position of this letter
    #[arg(long, value_name = "LETTER")]
    letter: Option<char>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode(args) => run_transform(args, Direction::Encode),
        Commands::Decode(args) => run_transform(args, Direction::Decode),
        Commands::Keygen { length } => {
            if *length == 0 {
                error!("The keyword length must be at least 1.");
                std::process::exit(1);
            }
            info!("Generating a random keyword of {length} letters.");
            match keygen::random_keyword(*length) {
                Ok(keyword) => println!("{keyword}"),
                Err(e) => {
                    error!("Failed to generate a keyword: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn run_transform(args: &TransformArgs, direction: Direction) {
    let text = read_input(args.input.as_deref());
    let result = transform_text(&args.key, &text, direction);
    write_output(args.output.as_deref(), &result);
}

fn transform_text(key: &KeyArgs, text: &str, direction: Direction) -> String {
    if let Some(keyword) = &key.keyword {
        let cipher = Vigenere::new(keyword).unwrap_or_else(|e| {
            error!("Invalid keyword: {e}");
            std::process::exit(1);
        });
        cipher.transform(text, direction)
    } else if let Some(offset) = key.offset {
        Caesar::from_offset(offset).transform(text, direction)
    } else if let Some(letter) = key.letter {
        let cipher = Caesar::from_letter(letter).unwrap_or_else(|e| {
            error!("Invalid offset letter: {e}");
            std::process::exit(1);
        });
        cipher.transform(text, direction)
    } else {
        // clap's argument group guarantees one selector is present.
        error!("No cipher selected.");
        std::process::exit(1);
    }
}

fn read_input(path: Option<&Path>) -> String {
    match path {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            error!("Failed to read input file '{}': {e}", path.display());
            std::process::exit(1);
        }),
        None => {
            let mut text = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut text) {
                error!("Failed to read from standard input: {e}");
                std::process::exit(1);
            }
            text
        }
    }
}

fn write_output(path: Option<&Path>, result: &str) {
    match path {
        Some(path) => {
            if let Err(e) = fs::write(path, result) {
                error!("Failed to write output file '{}': {e}", path.display());
                std::process::exit(1);
            }
            println!("Successfully wrote the result to '{}'", path.display());
        }
        None => print!("{result}"),
    }
}
