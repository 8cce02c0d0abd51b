//! `mfstring` CLI — convert between JSON string arrays and X3D MFString text.
//!
//! ## Usage
//!
//! ```sh
//! # JSON array → MFString (stdin → stdout)
//! echo '["apple","say \"hi\""]' | mfstring encode
//! # "apple" "say \"hi\""
//!
//! # MFString → pretty-printed JSON array
//! mfstring decode -i url.txt -o url.json
//!
//! # Skip malformed items instead of failing; warnings go to stderr
//! mfstring decode --lenient -i broken.txt
//!
//! # Validate only
//! mfstring check -i url.txt
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mfstring_core::{DecodeOptions, Strictness, TracingSink, UnterminatedPolicy};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mfstring", version, about = "X3D MFString encoder/decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON array of strings as MFString text
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode MFString text into a JSON array of strings
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Warn about malformed items and skip them instead of failing
        #[arg(long)]
        lenient: bool,
        /// Keep an unterminated final item if its content decodes
        #[arg(long, requires = "lenient")]
        keep_partial: bool,
    },
    /// Strictly validate MFString text and report the item count
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for piping.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let items: Vec<String> = serde_json::from_str(&json)
                .context("Failed to parse input as a JSON array of strings")?;
            let text = mfstring_core::encode(&items);
            write_output(output.as_deref(), &text)?;
        }
        Commands::Decode {
            input,
            output,
            lenient,
            keep_partial,
        } => {
            let text = read_input(input.as_deref())?;
            let options = build_decode_options(lenient, keep_partial);
            let items = mfstring_core::decode_with(&text, &options, &mut TracingSink)
                .context("Failed to decode MFString")?;
            tracing::debug!(items = items.len(), lenient, "decoded MFString");
            let pretty = serde_json::to_string_pretty(&items)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let items =
                mfstring_core::decode(&text, Strictness::Strict).context("Invalid MFString")?;
            println!("ok: {} item(s)", items.len());
        }
    }

    Ok(())
}

fn build_decode_options(lenient: bool, keep_partial: bool) -> DecodeOptions {
    if !lenient {
        return DecodeOptions::strict();
    }
    let policy = if keep_partial {
        UnterminatedPolicy::KeepPartial
    } else {
        UnterminatedPolicy::Drop
    };
    DecodeOptions::recoverable().with_unterminated(policy)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
