//! Error types for cookie-store parsing.

use thiserror::Error;

/// Errors produced while locating or decoding a binary cookie store.
///
/// Only the file-level variants (`FileNotFound`, `BadMagic`, `TruncatedHeader`,
/// `ProfileNotFound`, `Io`) surface from the import entry points. The
/// record-level variants (`TruncatedRecord`, `BadStringOffset`,
/// `InvalidString`) are absorbed by the import pipeline: the affected record
/// is skipped and the returned cookie sequence is simply shorter.
#[derive(Debug, Error)]
pub enum CookieError {
    #[error("Cookie file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid magic bytes (not a binarycookies file)")]
    BadMagic,

    #[error("Truncated header: need {needed} bytes, have {actual}")]
    TruncatedHeader { needed: usize, actual: usize },

    #[error("Record at offset {offset} is truncated")]
    TruncatedRecord { offset: usize },

    #[error("String offset {offset} does not resolve within the page")]
    BadStringOffset { offset: usize },

    #[error("String field is not valid UTF-8")]
    InvalidString,

    #[error("Safari profile not found: {profile}")]
    ProfileNotFound { profile: String },

    #[error("I/O error reading cookie file: {0}")]
    Io(#[from] std::io::Error),
}

impl CookieError {
    /// True for errors that abort an entire import. Record-level errors only
    /// drop the record they belong to.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            CookieError::TruncatedRecord { .. }
                | CookieError::BadStringOffset { .. }
                | CookieError::InvalidString
        )
    }
}
