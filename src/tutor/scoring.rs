//! Offline placeholder pronunciation scoring.
//!
//! The recording widget needs instant feedback without a round-trip: a
//! uniformly random score in 70–95 and one of two fixed feedback sets
//! switched at a threshold of 85.  The UI depends on these exact strings.
//! This is not a speech-scoring design; model-driven analysis goes through
//! [`TutorPipeline::analyze_pronunciation`](crate::tutor::TutorPipeline::analyze_pronunciation).

use rand::Rng;

use crate::tutor::records::PronunciationAnalysisRecord;

/// Scores strictly above this value get the "excellent" feedback set.
pub const PASS_THRESHOLD: u8 = 85;

/// Inclusive random score range of the placeholder.
pub const SCORE_RANGE: std::ops::RangeInclusive<u8> = 70..=95;

/// Produce a placeholder analysis with a random score in [`SCORE_RANGE`].
pub fn placeholder_analysis() -> PronunciationAnalysisRecord {
    let score = rand::thread_rng().gen_range(SCORE_RANGE);
    analysis_for_score(score)
}

/// The fixed feedback contract for a given score.
///
/// Split out from [`placeholder_analysis`] so the threshold behavior is
/// testable deterministically.
pub fn analysis_for_score(score: u8) -> PronunciationAnalysisRecord {
    if score > PASS_THRESHOLD {
        PronunciationAnalysisRecord {
            score,
            feedback: "Excellent pronunciation! Your articulation is very clear.".into(),
            areas_to_improve: vec![
                "Minor intonation adjustments would make it perfect".into(),
            ],
        }
    } else {
        PronunciationAnalysisRecord {
            score,
            feedback: "Good attempt! Try to focus on the position of your tongue and lips.".into(),
            areas_to_improve: vec![
                "Focus on the specific sound at the beginning".into(),
                "Try to elongate the vowel sound more".into(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
