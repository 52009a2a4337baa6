use clap::{Args, Parser, Subcommand};
use classical_ciphers::alphabet::Base;
use classical_ciphers::{
    Alberti, AlbertiMode, AlbertiParams, BlockRotate, BlockRotateParams, Cipher, Dictionary, Result,
    Scytale, ScytaleParams, Shift, ShiftParams, Vigenere,
};
use tracing::{error, info};

/// Command-line arguments for the ciphertext-only cryptanalyzer.
#[derive(Parser, Debug)]
#[command(version, about = "Recover the key of a classical cipher from ciphertext alone")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
}

/// Input ciphertext and output plaintext files
#[derive(Args, Debug)]
struct Io {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,
}

/// Word list used to judge plaintext
#[derive(Args, Debug)]
struct WordList {
    #[arg(short, long, default_value = "engmix.txt", help = "Path to the dictionary word list")]
    dictionary: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Brute force the Scytale row count
    Scytale {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        words: WordList,
        #[arg(long, default_value_t = 100)]
        max_key: usize,
        #[arg(long, default_value_t = 0.9)]
        threshold: f64,
    },

    /// Brute force Block Rotate block sizes and rotations
    BlockRotate {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        words: WordList,
        #[arg(long, default_value_t = 2)]
        b0: usize,
        #[arg(long, default_value_t = 20)]
        bn: usize,
        #[arg(long, allow_hyphen_values = true)]
        rotation: Option<i64>,
        #[arg(long, default_value_t = 0.8)]
        threshold: f64,
    },

    /// Brute force the Alberti pointer and mode
    Alberti {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        words: WordList,
        #[arg(long)]
        pointer: Option<char>,
        #[arg(long)]
        in_wheel: Option<String>,
        #[arg(long)]
        mode: Option<AlbertiMode>,
        #[arg(long, default_value_t = 0.8)]
        threshold: f64,
    },

    /// Recover a Shift key by chi-squared scoring
    Shift {
        #[command(flatten)]
        io: Io,
        /// Named base such as lower, upper, alphanum or all
        #[arg(long)]
        base: Option<Base>,
        #[arg(long, allow_hyphen_values = true)]
        shifts: Option<i64>,
        #[arg(long)]
        base_length: Option<usize>,
    },

    /// Recover a Vigenère key
    Vigenere {
        #[command(flatten)]
        io: Io,
    },

    /// Estimate the Vigenère key length
    KeyLength {
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: String,
    },
}

/// Main entry point for the cryptanalyzer.
fn main() {
    let cli: Cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match &cli.command {
        Commands::KeyLength { file } => estimate_key_length(file),
        command => {
            if let Some((io, outcome)) = analyze(command) {
                report(io, outcome);
            }
        }
    }
}

/// Prints the candidate key lengths of a Vigenère ciphertext
fn estimate_key_length(file: &str) {
    let ciphertext = read_input(file);
    match Vigenere::cryptanalyze_key_length(&ciphertext) {
        Ok(lengths) => println!("{lengths:?}"),
        Err(err) => {
            error!(%err, "key length estimation failed");
            std::process::exit(1);
        }
    }
}

/// Prints the key and writes the plaintext, or prints an empty key and
/// exits with status 1 when no key was recovered.
fn report(io: &Io, outcome: Result<(String, String)>) {
    match outcome {
        Ok((key, plaintext)) => {
            // Output key to stdout
            println!("{key}");
            match &io.output {
                Some(output) => {
                    std::fs::write(output, &plaintext).expect("Failed to write output file");
                    info!(%output, "plaintext written");
                }
                None => println!("{plaintext}"),
            }
        }
        Err(err) => {
            error!(%err, "no key recovered");
            println!();
            std::process::exit(1);
        }
    }
}

/// Runs the selected cryptanalysis driver.
///
/// # Arguments
///
/// * `command` - The parsed subcommand.
///
/// # Returns
///
/// The input/output options and either the recovered key, formatted for
/// display, with its plaintext, or the reason the search failed. `None` for
/// commands that do not recover a key.
fn analyze(command: &Commands) -> Option<(&Io, Result<(String, String)>)> {
    match command {
        Commands::Scytale { io, words, max_key, threshold } => {
            let params = ScytaleParams { max_key: *max_key, threshold: *threshold };
            let outcome = load_dictionary(words).and_then(|dictionary| {
                let ciphertext = read_input(&io.file);
                Scytale::cryptanalyze(&ciphertext, &dictionary, &params)
                    .map(|found| (found.key.to_string(), found.plaintext))
            });
            Some((io, outcome))
        }
        Commands::BlockRotate { io, words, b0, bn, rotation, threshold } => {
            let params = BlockRotateParams {
                b0: *b0,
                bn: *bn,
                rotation: *rotation,
                threshold: *threshold,
            };
            let outcome = load_dictionary(words).and_then(|dictionary| {
                let ciphertext = read_input(&io.file);
                BlockRotate::cryptanalyze(&ciphertext, &dictionary, &params)
                    .map(|found| (format!("{:?}", found.key), found.plaintext))
            });
            Some((io, outcome))
        }
        Commands::Alberti { io, words, pointer, in_wheel, mode, threshold } => {
            let params = AlbertiParams {
                pointer: *pointer,
                in_wheel: in_wheel.clone(),
                mode: *mode,
                threshold: *threshold,
            };
            let outcome = load_dictionary(words).and_then(|dictionary| {
                let ciphertext = read_input(&io.file);
                Alberti::cryptanalyze(&ciphertext, &dictionary, &params).map(|found| {
                    let key = format!("{:?}, mode = {}", found.key.key(), found.key.mode());
                    (key, found.plaintext)
                })
            });
            Some((io, outcome))
        }
        Commands::Shift { io, base, shifts, base_length } => {
            let params = ShiftParams {
                base: base.map(|base| base.symbols().to_string()),
                shifts: *shifts,
                base_length: *base_length,
            };
            let ciphertext = read_input(&io.file);
            let outcome = Shift::cryptanalyze(&ciphertext, &params)
                .map(|found| (format!("{:?}", found.key), found.plaintext));
            Some((io, outcome))
        }
        Commands::Vigenere { io } => {
            let ciphertext = read_input(&io.file);
            let outcome =
                Vigenere::cryptanalyze(&ciphertext).map(|found| (found.key, found.plaintext));
            Some((io, outcome))
        }
        Commands::KeyLength { .. } => None,
    }
}

fn load_dictionary(words: &WordList) -> Result<Dictionary> {
    let dictionary = Dictionary::load(&words.dictionary)?;
    info!(words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}

fn read_input(file: &str) -> String {
    std::fs::read_to_string(file).expect("Failed to read input file")
}
