pub mod config;
pub mod storage;
pub mod tokenizer;

use std::path::PathBuf;

use collections::{HashTable, Stats};
use log::{error, info};

pub use config::Config;

/// Failures of a word count run.
///
/// The `Display` text of each variant is the fixed message shown to the
/// user, the underlying cause (if any) is kept as the error's source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Anything other than exactly an input and an output path
    #[error("Not enough arguments.")]
    Usage { got: usize },

    /// The input file could not be opened or read
    #[error("Failed to make HashTable")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written
    #[error("Failed to make Output File")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Counts the words of `config.input` into a fresh table, writes the table
/// to `config.output` and returns its summary.
///
/// The output file is not touched when the input cannot be read.
pub fn run(config: &Config) -> Result<Stats> {
    let mut table = HashTable::with_capacity(config.initial_capacity);

    storage::load(&mut table, &config.input)?;
    storage::save(&table, &config.output)?;

    let stats = table.stats();
    info!(
        "counted {} words ({} distinct) from {} into {}",
        stats.total_words,
        table.len(),
        config.input.display(),
        config.output.display()
    );
    Ok(stats)
}

/// Runs [`run`] and renders the outcome as the text printed to the user:
/// `"Success.\n"` followed by the stats, or the error's message
pub fn word_count(config: &Config) -> String {
    match run(config) {
        Ok(stats) => format!("Success.\n{stats}"),
        Err(e) => {
            log_failure(&e);
            e.to_string()
        }
    }
}

fn log_failure(e: &Error) {
    match e {
        Error::Usage { got } => error!("expected 2 arguments, got {got}"),
        Error::InputUnreadable { path, source } => {
            error!("could not read {}: {}", path.display(), source)
        }
        Error::OutputUnwritable { path, source } => {
            error!("could not write {}: {}", path.display(), source)
        }
    }
}
