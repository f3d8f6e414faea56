//!
//! Result document reading error.
//!

use std::path::PathBuf;

///
/// Result document reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("Reading result document {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the result document.
        path: PathBuf,
    },
    /// The file is not a valid result document.
    #[error("Parsing result document {path:?}: {error}")]
    Parsing {
        /// The underlying JSON error.
        error: serde_json::Error,
        /// The path to the result document.
        path: PathBuf,
    },
    /// The file has no content.
    #[error("Result document {path:?} is empty")]
    EmptyFile {
        /// The path to the result document.
        path: PathBuf,
    },
}
