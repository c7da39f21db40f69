// chordshift: transpose a plain-text chord sheet.
//
// Reads the sheet from FILE, or stdin when FILE is missing or `-`, and writes
// the transposed sheet to stdout. Logging goes to stderr and is controlled by
// RUST_LOG (default `chordshift=info`).
//
// Usage:
//   chordshift [FILE] [--steps N] [--key KEY] [--to KEY]
//
// `--to` needs `--key` and replaces `--steps` with the shortest shift between
// the two keys.

use std::io::{self, Read};
use std::str::FromStr;

use chordshift::chord::Note;
use chordshift::{steps_between, transpose_chord, transpose_text, ChordError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const VALUE_FLAGS: [&str; 3] = ["--steps", "--key", "--to"];

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chordshift=info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: chordshift [FILE] [--steps N] [--key KEY] [--to KEY]");
        return Ok(());
    }

    let key: Option<String> = parse_flag(args, "--key")?;
    let target: Option<String> = parse_flag(args, "--to")?;
    let steps: i32 = parse_flag(args, "--steps")?.unwrap_or(0);

    if let Some(key) = &key {
        Note::from_str(key).map_err(|_| ChordError::UnknownKey(key.clone()))?;
    }

    let steps = match (&key, &target) {
        (Some(key), Some(target)) => steps_between(key, target)
            .ok_or_else(|| ChordError::UnknownKey(target.clone()))?,
        (None, Some(_)) => {
            return Err(ChordError::InvalidArgument("--to requires --key".to_string()));
        }
        _ => steps,
    };

    let sheet = match positional(args) {
        Some(path) if path != "-" => {
            tracing::debug!("Reading {}", path);
            std::fs::read_to_string(path)?
        }
        _ => {
            let mut sheet = String::new();
            io::stdin().read_to_string(&mut sheet)?;
            sheet
        }
    };

    tracing::info!("Transposing by {} semitones", steps);

    if let Some(key) = &key {
        println!("Key: {}", transpose_chord(key, steps));
    }
    print!("{}", transpose_text(&sheet, steps));

    Ok(())
}

/// Value following `flag`, if the flag is present.
fn parse_flag<T: FromStr>(args: &[String], flag: &str) -> Result<Option<T>> {
    let index = match args.iter().position(|a| a == flag) {
        Some(index) => index,
        None => return Ok(None),
    };

    let value = args.get(index + 1)
        .ok_or_else(|| ChordError::InvalidArgument(format!("{} needs a value", flag)))?;

    value.parse()
        .map(Some)
        .map_err(|_| ChordError::InvalidArgument(format!("{} {}", flag, value)))
}

/// First argument that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip = true;
            continue;
        }
        if arg == "-" || !arg.starts_with("--") {
            return Some(arg.as_str());
        }
    }
    None
}
