//! Error type shared by the library and the binary.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors of which majority are related to I/O issues
pub enum Error {
    #[error("Could not open sequence file {path:?}")]
    /// The file does not exist or could not be opened for reading
    OpenFile {
        /// File that was requested
        path: PathBuf,
        /// Underlying failure
        source: niffler::Error,
    },
    #[error("Could not read sequence file {path:?}")]
    /// A line of an opened file could not be read
    ReadFile {
        /// File being read
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },
    #[error("Could not write the report")]
    /// Writing the report or the statistics failed
    Io(#[from] std::io::Error),
    #[error("Could not spawn threads")]
    /// The global thread pool could not be created
    ThreadError,
    #[error("Only A, G, C and T nucleotides are allowed but got {0}")]
    /// Incorrect nucleotide supplied
    IncorrectNuc(String),
    #[error("K-mer length must be at least 1 but got {0}")]
    /// Zero length k-mers are meaningless
    InvalidKmerSize(usize),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
