use std::str::FromStr;

use clap::{Parser, ValueEnum};
use classical_ciphers::{Alberti, AlbertiMode, BlockRotate, Cipher, Scytale, Shift, Vigenere};
use tracing::{info, warn};

/// Command-line arguments for the classical cipher tool.
#[derive(Parser, Debug)]
#[command(version, about = "Encrypt or decrypt a file with a classical cipher")]
struct Cli {
    /// Cipher to apply
    #[arg(short, long, value_enum, help = "Cipher to apply")]
    cipher: CipherKind,

    /// Key in the cipher's syntax: `5`, `5,2`, `3,26,51`, `k` or `k,<wheel>`, `keyword`
    #[arg(short, long, help = "Key for the cipher")]
    key: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Pad character for Scytale and Block Rotate, empty for no padding
    #[arg(short, long, help = "Pad character (Scytale, Block Rotate)")]
    pad: Option<String>,

    /// Alberti disk mode
    #[arg(long, default_value = "default", help = "Alberti mode (default/simple/periodic)")]
    alberti_mode: AlbertiMode,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherKind {
    Scytale,
    BlockRotate,
    Alberti,
    Shift,
    Vigenere,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the cipher tool.
fn main() {
    let cli: Cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let content: String = std::fs::read_to_string(&cli.file).expect("Failed to read input file");

    let result = match cli.cipher {
        CipherKind::Scytale => {
            let key = parse_numbers::<usize>(&cli.key)
                .and_then(|numbers| numbers.first().copied())
                .unwrap_or_else(|| fallback(&cli.key, Scytale::DEFAULT_KEY));
            let pad = cli.pad.as_deref().unwrap_or("Q");
            run(&Scytale::new(key, pad), cli.mode, &content)
        }
        CipherKind::BlockRotate => {
            let key = match parse_numbers::<i64>(&cli.key).as_deref() {
                Some(&[block_size, rotation]) if block_size > 0 => (block_size as usize, rotation),
                _ => fallback(&cli.key, BlockRotate::DEFAULT_KEY),
            };
            let pad = cli.pad.as_deref().unwrap_or("q");
            run(&BlockRotate::new(key, pad), cli.mode, &content)
        }
        CipherKind::Alberti => {
            let key = parse_alberti_key(&cli.key).unwrap_or_else(|| {
                let (pointer, wheel) = Alberti::DEFAULT_KEY;
                fallback(&cli.key, (pointer, wheel.to_string()))
            });
            run(&Alberti::new(key, cli.alberti_mode), cli.mode, &content)
        }
        CipherKind::Shift => {
            let key = match parse_numbers::<i64>(&cli.key).as_deref() {
                Some(&[shifts, start, end]) if start >= 0 && end >= 0 => {
                    (shifts, start as usize, end as usize)
                }
                _ => fallback(&cli.key, Shift::DEFAULT_KEY),
            };
            run(&Shift::new(key), cli.mode, &content)
        }
        CipherKind::Vigenere => run(&Vigenere::new(&cli.key), cli.mode, &content),
    };

    std::fs::write(&cli.output, result).expect("Failed to write output file");

    info!(output = %cli.output, "operation completed");
}

/// Applies the cipher in the requested direction.
///
/// # Arguments
///
/// * `cipher` - The configured cipher.
/// * `mode` - Encrypt or decrypt.
/// * `content` - The input text.
///
/// # Returns
///
/// A `String` containing the transformed text.
fn run<C: Cipher + std::fmt::Display>(cipher: &C, mode: OperationMode, content: &str) -> String {
    info!("{cipher}");
    match mode {
        OperationMode::Encrypt => cipher.encrypt(content),
        OperationMode::Decrypt => cipher.decrypt(content),
    }
}

/// Parses a comma separated list of numbers, e.g. `3,26,51`
fn parse_numbers<T: FromStr>(key: &str) -> Option<Vec<T>> {
    key.split(',').map(|part| part.trim().parse().ok()).collect()
}

/// Parses `pointer` or `pointer,wheel`
fn parse_alberti_key(key: &str) -> Option<(char, String)> {
    let (pointer, wheel) = match key.split_once(',') {
        Some((pointer, wheel)) => (pointer.trim(), wheel.trim().to_string()),
        None => (key.trim(), Alberti::DEFAULT_KEY.1.to_string()),
    };

    let mut chars = pointer.chars();
    match (chars.next(), chars.next()) {
        (Some(pointer), None) => Some((pointer, wheel)),
        _ => None,
    }
}

fn fallback<K: std::fmt::Debug>(key: &str, default: K) -> K {
    warn!(key, ?default, "unparsable key, using default");
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers::<i64>("3, 26,51"), Some(vec![3, 26, 51]));
        assert_eq!(parse_numbers::<usize>("5"), Some(vec![5]));
        assert_eq!(parse_numbers::<usize>("five"), None);
        assert_eq!(parse_numbers::<i64>("1,,2"), None);
    }

    #[test]
    fn test_parse_alberti_key() {
        assert_eq!(
            parse_alberti_key("d"),
            Some(('d', Alberti::DEFAULT_KEY.1.to_string()))
        );
        let wheel: String = Alberti::OUT_WHEEL.chars().rev().collect();
        assert_eq!(parse_alberti_key(&format!("x,{wheel}")), Some(('x', wheel)));
        assert_eq!(parse_alberti_key("xy"), None);
        assert_eq!(parse_alberti_key(""), None);
    }

    #[test]
    fn test_run_round_trip() {
        let cipher = Shift::new((5, 0, 94));
        let encrypted = run(&cipher, OperationMode::Encrypt, "Hello, World!");
        assert_eq!(run(&cipher, OperationMode::Decrypt, &encrypted), "Hello, World!");
    }
}
