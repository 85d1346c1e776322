//! Response normalization: model reply text → typed record.
//!
//! The model is instructed to return bare JSON but is not guaranteed to omit
//! markdown fencing or leading whitespace.  [`clean_model_reply`] is a
//! defensive best-effort cleanup, not a recovery parser: it strips fences
//! and whitespace only, and never attempts bracket balancing, trailing-comma
//! repair, or partial extraction.

use serde::de::DeserializeOwned;

use crate::tutor::error::TutorError;
use crate::tutor::records::Validate;

// ---------------------------------------------------------------------------
// Cleanup
// ---------------------------------------------------------------------------

/// Strip markdown code-block fencing and surrounding whitespace from a raw
/// model reply.
///
/// Steps, in order:
/// 1. remove triple-backtick fences, with or without a `json` language tag;
/// 2. trim surrounding whitespace;
/// 3. drop one leading newline if one is still present.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_model_reply(raw: &str) -> String {
    let without_fences = raw.replace("```json", "").replace("```", "");
    let trimmed = without_fences.trim();
    let cleaned = trimmed.strip_prefix('\n').unwrap_or(trimmed);
    cleaned.to_string()
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Clean `raw` and parse it into a record of type `T`, then validate the
/// record's shape.
///
/// # Errors
///
/// [`TutorError::Format`] carrying the serde parse detail, or the shape
/// violation description when the parsed value fails [`Validate`].  The raw
/// text is not logged here; the pipeline logs it at its boundary.
pub fn parse_record<T>(raw: &str) -> Result<T, TutorError>
where
    T: DeserializeOwned + Validate,
{
    let cleaned = clean_model_reply(raw);
    let record: T =
        serde_json::from_str(&cleaned).map_err(|e| TutorError::Format(e.to_string()))?;
    record.validate().map_err(TutorError::Format)?;
    Ok(record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
