//! Error types for cluecards operations.
//!
//! This module defines the main error type [`CluecardsError`] which represents
//! all possible errors that can occur during page fetching, archive traversal,
//! and episode extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for archive scraping and extraction operations.
///
/// Extraction failures are deliberately coarse: an episode either yields a
/// full record sequence or fails as a whole with [`NoRoundsFound`]. Missing
/// fields inside an otherwise recognizable round degrade to empty strings
/// and are never surfaced as errors.
///
/// [`NoRoundsFound`]: CluecardsError::NoRoundsFound
#[derive(Error, Debug)]
pub enum CluecardsError {
    /// HTTP request errors from reqwest.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration
    /// on every retry attempt.
    #[cfg(feature = "fetch")]
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML query errors.
    ///
    /// Returned when a CSS selector cannot be parsed. Malformed page markup
    /// is not an error; missing nodes simply yield empty selections.
    #[error("Failed to query HTML: {0}")]
    HtmlParseError(String),

    /// No round container located anywhere in the page.
    ///
    /// Fatal to the episode only. Callers skip the page and continue with
    /// the rest of the season.
    #[error("No rounds found in episode {page}")]
    NoRoundsFound { page: String },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File I/O errors.
    ///
    /// Wraps standard I/O errors for archive reads and CSV writes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CluecardsError.
pub type Result<T> = std::result::Result<T, CluecardsError>;
