//! Sample learner-progress data.
//!
//! There is no persistence layer or real tracking behind the progress page;
//! it renders this fixed sample record.  The types are serializable so the
//! same shapes can back a real data source later.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One day of practice history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeDay {
    /// ISO-8601 calendar date.
    pub date: String,
    /// Minutes practiced that day.
    pub minutes: u32,
    /// Average pronunciation score that day.
    pub score: u8,
}

/// Completion percentage for one conversation topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicProgress {
    pub topic: String,
    pub progress: u8,
}

/// Mastery percentage for one pronunciation sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundProgress {
    pub sound: String,
    pub progress: u8,
}

/// Aggregate progress snapshot rendered by the progress page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    /// Consecutive practice days.
    pub streak: u32,
    /// Total practice time in minutes.
    pub total_practice_minutes: u32,
    pub words_learned: u32,
    pub pronunciation_score: u8,
    pub practice_history: Vec<PracticeDay>,
    pub topic_progress: Vec<TopicProgress>,
    pub pronunciation_progress: Vec<SoundProgress>,
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// The fixed sample snapshot.
pub fn sample_progress() -> UserProgress {
    UserProgress {
        streak: 7,
        total_practice_minutes: 320,
        words_learned: 142,
        pronunciation_score: 82,
        practice_history: vec![
            day("2025-03-21", 15, 78),
            day("2025-03-22", 25, 80),
            day("2025-03-23", 30, 79),
            day("2025-03-24", 20, 81),
            day("2025-03-25", 35, 83),
            day("2025-03-26", 40, 85),
            day("2025-03-27", 45, 87),
        ],
        topic_progress: vec![
            topic("Daily Conversations", 75),
            topic("Travel & Tourism", 60),
            topic("Business English", 45),
            topic("Academic Discussions", 30),
            topic("Social Situations", 65),
        ],
        pronunciation_progress: vec![
            sound("TH Sound", 85),
            sound("R Sound", 70),
            sound("Vowel Sounds", 75),
            sound("L vs R", 65),
            sound("Word Stress", 80),
        ],
    }
}

fn day(date: &str, minutes: u32, score: u8) -> PracticeDay {
    PracticeDay {
        date: date.into(),
        minutes,
        score,
    }
}

fn topic(topic: &str, progress: u8) -> TopicProgress {
    TopicProgress {
        topic: topic.into(),
        progress,
    }
}

fn sound(sound: &str, progress: u8) -> SoundProgress {
    SoundProgress {
        sound: sound.into(),
        progress,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_snapshot_is_internally_consistent() {
        let progress = sample_progress();

        assert_eq!(progress.practice_history.len(), 7);
        assert_eq!(progress.streak, 7);
        assert_eq!(progress.topic_progress.len(), 5);
        assert_eq!(progress.pronunciation_progress.len(), 5);
        assert!(progress.practice_history.iter().all(|d| d.score <= 100));
    }

    #[test]
    fn sample_snapshot_round_trips_through_json() {
        let progress = sample_progress();
        let json = serde_json::to_string(&progress).expect("serialize");
        let back: UserProgress = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.words_learned, progress.words_learned);
        assert_eq!(back.practice_history.len(), progress.practice_history.len());
        assert_eq!(back.topic_progress[0].topic, "Daily Conversations");
    }
}
