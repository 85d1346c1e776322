//! Raw speech-synthesis call against the provider's `/v1/audio/speech`
//! endpoint.
//!
//! Unlike the chat path there is no SDK-shaped JSON reply here: a success is
//! binary MPEG audio, a failure is a JSON body with an optional
//! `error.message` field.  The audio is returned base64-encoded so the
//! caller can hand it straight to an `<audio>` data URL.

use base64::Engine;

use crate::tutor::error::TutorError;
use crate::tutor::records::SpeechResult;

/// MIME type of the synthesized audio.
pub const SPEECH_CONTENT_TYPE: &str = "audio/mpeg";

/// POST `{base_url}/v1/audio/speech` and return the base64-encoded audio.
///
/// One network call, no retry.  Non-success responses become
/// [`TutorError::Upstream`] carrying the provider's `error.message` when the
/// body holds one, otherwise the transport status text.
pub(crate) async fn synthesize(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    model: &str,
    text: &str,
    voice: &str,
) -> Result<SpeechResult, TutorError> {
    let url = format!("{base_url}/v1/audio/speech");

    let body = serde_json::json!({
        "model": model,
        "input": text,
        "voice": voice
    });

    let response = client
        .post(&url)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TutorError::upstream_from_response(status, &body));
    }

    let bytes = response.bytes().await?;

    Ok(SpeechResult {
        audio: base64::engine::general_purpose::STANDARD.encode(&bytes),
        content_type: SPEECH_CONTENT_TYPE.into(),
    })
}
