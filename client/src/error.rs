//! Unified error types for the shopfront client
//!
//! This module defines error types for each layer:
//! - `ApiError`: backend transport errors
//! - `EncodeError` / `DecodeError`: review wire codec errors
//! - `AppError`: application layer errors (what controllers hand to callers)
//! - `ParseError`: session command parsing errors

use thiserror::Error;

/// Backend transport errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Review wire encoding errors
///
/// The codec refuses text containing the delimiter literal before any
/// request is made; see `wire` for the policy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("review text contains the reserved delimiter sequence")]
    DelimiterInText,
}

/// Review wire decoding errors
///
/// Only the decode half of the codec constructs these; the client
/// itself just encodes.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum DecodeError {
    #[error("payload does not contain the delimiter sequence")]
    MissingDelimiter,

    #[error("invalid submitter id: {0}")]
    InvalidSubmitter(#[from] std::num::ParseIntError),
}

/// Application layer errors - surfaced to the user by the session shell
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Encoding(#[from] EncodeError),
}

impl AppError {
    /// True when the failure never left the client (no request was sent).
    pub fn is_local(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Encoding(_))
    }
}

/// Parse error for session commands
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),
}
