//! Prompt construction for the three generation tasks.
//!
//! Each builder returns a `(system, user)` message pair for an
//! OpenAI-compatible `/v1/chat/completions` endpoint.  The system message
//! embeds the exact JSON shape the response normalizer expects, so the
//! prompt and the record structs in [`records`](crate::tutor::records) must
//! be kept in sync.

// ---------------------------------------------------------------------------
// Response shapes embedded in the system instructions
// ---------------------------------------------------------------------------

const CONVERSATION_SHAPE: &str = r#"{
  "title": "Conversation title",
  "dialogue": [
    {"speaker": "Person A", "text": "Hello, how are you?", "pronunciation": "/həˈloʊ, haʊ ɑr juː/"},
    {"speaker": "Person B", "text": "I'm fine, thanks.", "pronunciation": "/aɪm faɪn, θæŋks/"}
  ],
  "vocabulary": [
    {"phrase": "How are you", "meaning": "A greeting to ask about someone's wellbeing", "pronunciation": "/haʊ ɑr juː/"},
    {"phrase": "I'm fine", "meaning": "A response indicating you are well", "pronunciation": "/aɪm faɪn/"}
  ]
}"#;

const ANALYSIS_SHAPE: &str = r#"{
  "score": 85,
  "feedback": "Your pronunciation was good, but you need to work on...",
  "areas_to_improve": ["specific sound 1", "specific sound 2"]
}"#;

const EXERCISE_SHAPE: &str = r#"{
  "id": "unique-id-for-the-sound",
  "title": "Exercise title",
  "description": "Brief description of the sound and how to pronounce it",
  "examples": [
    {"text": "Example word", "phonetic": "/phonetic-transcription/"},
    {"text": "Another word", "phonetic": "/phonetic-transcription/"}
  ]
}"#;

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Prompt pair for conversation generation.
pub fn conversation(topic: &str, level: &str) -> (String, String) {
    let system = format!(
        "You are an English language teaching assistant. Create a realistic conversation \
         scenario for English learners.\n\
         The conversation should be appropriate for {level} level students and focus on the \
         topic of \"{topic}\".\n\
         Include phonetic pronunciation guides for key phrases.\n\
         Format your response as a JSON object with the following structure:\n\
         {CONVERSATION_SHAPE}"
    );
    let user = format!("Create a conversation about {topic} for {level} level English learners.");
    (system, user)
}

/// Prompt pair for pronunciation feedback on `reference_text`.
///
/// Only the reference text drives the analysis; no audio is described to the
/// model.
pub fn pronunciation_analysis(reference_text: &str) -> (String, String) {
    let system = format!(
        "You are an English pronunciation analysis tool.\n\
         Analyze the pronunciation of the text \"{reference_text}\" and provide feedback.\n\
         Format your response as a JSON object with the following structure:\n\
         {ANALYSIS_SHAPE}"
    );
    let user = format!("Analyze the pronunciation of \"{reference_text}\".");
    (system, user)
}

/// Prompt pair for a pronunciation exercise targeting `sound`.
pub fn pronunciation_exercise(sound: &str, level: &str) -> (String, String) {
    let system = format!(
        "You are an English pronunciation teaching assistant. Create a pronunciation exercise \
         focused on a specific sound or phonetic feature.\n\
         The exercise should be appropriate for {level} level students and focus on the \
         \"{sound}\" sound or feature.\n\
         Format your response as a JSON object with the following structure:\n\
         {EXERCISE_SHAPE}"
    );
    let user = format!(
        "Create a pronunciation exercise for the \"{sound}\" sound for {level} level English learners."
    );
    (system, user)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_system_embeds_level_topic_and_shape() {
        let (system, user) = conversation("travel", "intermediate");

        assert!(system.contains("intermediate level students"));
        assert!(system.contains("\"travel\""));
        assert!(system.contains("\"dialogue\""), "shape block must be embedded");
        assert!(system.contains("\"vocabulary\""));
        assert!(user.contains("travel"));
        assert!(user.contains("intermediate"));
    }

    #[test]
    fn analysis_prompt_is_driven_by_reference_text_only() {
        let (system, user) = pronunciation_analysis("Think");

        assert!(system.contains("\"Think\""));
        assert!(system.contains("\"areas_to_improve\""));
        assert!(user.contains("\"Think\""));
    }

    #[test]
    fn exercise_prompt_names_the_sound_and_level() {
        let (system, user) = pronunciation_exercise("th sound", "beginner");

        assert!(system.contains("\"th sound\""));
        assert!(system.contains("beginner level students"));
        assert!(system.contains("\"examples\""));
        assert!(user.contains("\"th sound\""));
        assert!(user.contains("beginner"));
    }

    /// The embedded shapes parse as JSON themselves — a broken template
    /// would teach the model a broken contract.
    #[test]
    fn shape_templates_are_valid_json() {
        for shape in [CONVERSATION_SHAPE, ANALYSIS_SHAPE, EXERCISE_SHAPE] {
            serde_json::from_str::<serde_json::Value>(shape).expect("template must be JSON");
        }
    }
}
