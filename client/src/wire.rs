//! Review wire codec
//!
//! Review submissions travel as a single plain text payload of the form
//! `<submitterId>|ID_SPLIT|<reviewText>`, where the submitter id is in
//! decimal and the text is literal. The backend splits on the first
//! occurrence of the delimiter.
//!
//! Delimiter collision policy: `encode` REJECTS text containing the
//! literal delimiter sequence, locally, before any request is made.
//! Every other text is sent unescaped, byte-for-byte what the backend
//! already accepts. `decode` stays lenient and splits on the first
//! occurrence, so a decoded text may itself contain the delimiter;
//! the strictness lives entirely on the sending side.

use crate::domain::entities::ReviewSubmission;
use crate::error::{DecodeError, EncodeError};

/// The fixed marker separating submitter id from review text
pub const DELIMITER: &str = "|ID_SPLIT|";

/// Encode a submission into the wire payload.
pub fn encode(submission: &ReviewSubmission) -> Result<String, EncodeError> {
    if submission.text.contains(DELIMITER) {
        return Err(EncodeError::DelimiterInText);
    }
    Ok(format!(
        "{}{DELIMITER}{}",
        submission.submitter, submission.text
    ))
}

/// Decode a wire payload back into (submitter id, review text).
///
/// This is the backend's half of the contract, kept here so the two
/// directions are specified - and tested - together.
#[allow(dead_code)] // exercised by tests; the client itself only encodes
pub fn decode(payload: &str) -> Result<(i64, &str), DecodeError> {
    let (id, text) = payload
        .split_once(DELIMITER)
        .ok_or(DecodeError::MissingDelimiter)?;
    Ok((id.parse()?, text))
}
