//! Typed records returned by the tutor pipeline.
//!
//! Each record mirrors the JSON shape the generation prompts instruct the
//! model to produce.  Parsing alone is not trusted: every record implements
//! [`Validate`], and the normalizer rejects shape violations (empty
//! sequences, blank required fields, out-of-range scores) as format errors
//! instead of handing them to the UI.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Validate
// ---------------------------------------------------------------------------

/// Post-parse shape validation.
///
/// Returns a human-readable violation description; the normalizer converts
/// it into [`TutorError::Format`](crate::tutor::TutorError::Format).
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

// ---------------------------------------------------------------------------
// ConversationRecord
// ---------------------------------------------------------------------------

/// One turn of a generated conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Speaker label (e.g. `"Person A"`).
    pub speaker: String,
    /// The spoken line.
    pub text: String,
    /// IPA pronunciation guide for the line.
    pub pronunciation: String,
}

/// A vocabulary entry extracted from a generated conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// The phrase itself.
    pub phrase: String,
    /// Plain-language meaning.
    pub meaning: String,
    /// IPA pronunciation guide.
    pub pronunciation: String,
}

/// A complete practice conversation for a topic/level pair.
///
/// `dialogue` and `vocabulary` preserve the model's output order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub title: String,
    pub dialogue: Vec<DialogueTurn>,
    pub vocabulary: Vec<VocabularyItem>,
}

impl Validate for ConversationRecord {
    fn validate(&self) -> Result<(), String> {
        if self.dialogue.is_empty() {
            return Err("conversation has no dialogue lines".into());
        }
        if self.vocabulary.is_empty() {
            return Err("conversation has no vocabulary entries".into());
        }
        if self.dialogue.iter().any(|turn| turn.text.trim().is_empty()) {
            return Err("dialogue line with empty text".into());
        }
        if self.vocabulary.iter().any(|v| v.phrase.trim().is_empty()) {
            return Err("vocabulary entry with empty phrase".into());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PronunciationAnalysisRecord
// ---------------------------------------------------------------------------

/// Feedback on a learner's pronunciation attempt.
///
/// The producer contract bounds `score` to 0–100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronunciationAnalysisRecord {
    pub score: u8,
    pub feedback: String,
    pub areas_to_improve: Vec<String>,
}

impl Validate for PronunciationAnalysisRecord {
    fn validate(&self) -> Result<(), String> {
        if self.score > 100 {
            return Err(format!("score {} is out of range 0-100", self.score));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PronunciationExerciseRecord
// ---------------------------------------------------------------------------

/// A single example word inside an exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseExample {
    /// Example word or phrase.
    pub text: String,
    /// IPA transcription (e.g. `"/θɪŋk/"`).
    pub phonetic: String,
}

/// A pronunciation exercise targeting one sound or phonetic feature.
///
/// `id` is a slug; callers holding a list of exercises keep ids unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronunciationExerciseRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<ExerciseExample>,
}

impl Validate for PronunciationExerciseRecord {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("exercise has an empty id".into());
        }
        if self.examples.is_empty() {
            return Err("exercise has no examples".into());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SpeechResult
// ---------------------------------------------------------------------------

/// Synthesized speech, base64-encoded for transfer to the caller.
///
/// Held only long enough to be decoded into a playable resource; never
/// written to disk by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechResult {
    /// Base64-encoded MPEG audio bytes.
    pub audio: String,
    /// Always `"audio/mpeg"`.
    #[serde(rename = "contentType")]
    pub content_type: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation() -> ConversationRecord {
        ConversationRecord {
            title: "At the Airport".into(),
            dialogue: vec![DialogueTurn {
                speaker: "Person A".into(),
                text: "Where is gate 12?".into(),
                pronunciation: "/wɛr ɪz ɡeɪt twɛlv/".into(),
            }],
            vocabulary: vec![VocabularyItem {
                phrase: "gate".into(),
                meaning: "the airport exit to a plane".into(),
                pronunciation: "/ɡeɪt/".into(),
            }],
        }
    }

    #[test]
    fn well_formed_conversation_passes() {
        assert!(conversation().validate().is_ok());
    }

    #[test]
    fn empty_dialogue_is_rejected() {
        let mut record = conversation();
        record.dialogue.clear();
        let err = record.validate().unwrap_err();
        assert!(err.contains("no dialogue"));
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let mut record = conversation();
        record.vocabulary.clear();
        assert!(record.validate().is_err());
    }

    #[test]
    fn blank_dialogue_text_is_rejected() {
        let mut record = conversation();
        record.dialogue[0].text = "   ".into();
        assert!(record.validate().is_err());
    }

    #[test]
    fn blank_vocabulary_phrase_is_rejected() {
        let mut record = conversation();
        record.vocabulary[0].phrase = String::new();
        assert!(record.validate().is_err());
    }

    #[test]
    fn analysis_score_above_100_is_rejected() {
        let record = PronunciationAnalysisRecord {
            score: 120,
            feedback: "?".into(),
            areas_to_improve: vec![],
        };
        let err = record.validate().unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn analysis_score_at_bounds_passes() {
        for score in [0, 100] {
            let record = PronunciationAnalysisRecord {
                score,
                feedback: "ok".into(),
                areas_to_improve: vec![],
            };
            assert!(record.validate().is_ok());
        }
    }

    #[test]
    fn exercise_without_examples_is_rejected() {
        let record = PronunciationExerciseRecord {
            id: "th".into(),
            title: "TH Sound".into(),
            description: "…".into(),
            examples: vec![],
        };
        assert!(record.validate().is_err());
    }

    #[test]
    fn exercise_with_blank_id_is_rejected() {
        let record = PronunciationExerciseRecord {
            id: "  ".into(),
            title: "TH Sound".into(),
            description: "…".into(),
            examples: vec![ExerciseExample {
                text: "Think".into(),
                phonetic: "/θɪŋk/".into(),
            }],
        };
        assert!(record.validate().is_err());
    }

    /// The wire name of the MIME field is `contentType`, matching what the
    /// UI's audio element builds its data URL from.
    #[test]
    fn speech_result_serializes_content_type_camel_case() {
        let result = SpeechResult {
            audio: "AAAA".into(),
            content_type: "audio/mpeg".into(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"contentType\":\"audio/mpeg\""));
    }
}
