//! Review domain entities
//!
//! Reviews are append-only from the client's perspective: created by
//! submission, immutable afterward. The `comment` text is whatever the
//! submitter typed - the backend gives no sanitization guarantee, so
//! rendering decides how to treat embedded markup (see `render`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-submitted review attached to one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    /// Raw text content; may contain arbitrary markup
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Ephemeral value carrying one review to the encoder
///
/// Exists only to be encoded into a wire payload and discarded once the
/// request completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub submitter: i64,
    pub text: String,
}

impl ReviewSubmission {
    pub fn new(submitter: i64, text: impl Into<String>) -> Self {
        Self {
            submitter,
            text: text.into(),
        }
    }

    /// Empty or whitespace-only text is rejected locally, before any
    /// request is made.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
