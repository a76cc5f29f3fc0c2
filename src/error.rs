//! Errors for everything around the aligners: reading input, validating
//! sequences, and loading parameters.
//!
//! The aligners themselves cannot fail. An infeasible banded alignment is a
//! regular result with infinite cost.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid FASTA record in {path}: {message}")]
    Fasta { path: PathBuf, message: String },

    #[error("Unknown file extension {extension:?} for {path}. Must be in {{seq,txt,fna,fa,fasta}}.")]
    UnknownExtension { path: PathBuf, extension: String },

    #[error("{path} contains an odd number of sequences; pairs are formed from consecutive records")]
    OddRecordCount { path: PathBuf },

    #[error("Line {line} of {path} should start with {expected:?}")]
    MissingMarker {
        path: PathBuf,
        line: usize,
        expected: char,
    },

    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Sequence is empty")]
    EmptySequence,

    #[error("The maximum alignment length must be positive")]
    ZeroMaxLength,

    #[error("Invalid parameters in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write results: {0}")]
    Output(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn fasta(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Fasta {
            path: path.into(),
            message: message.into(),
        }
    }
}
