//! Static practice catalogs: topics, difficulty levels, and the seeded
//! pronunciation exercises the UI offers before any generation happens.
//!
//! Two const tables ([`TOPICS`], [`LEVELS`]) cover the selection dropdowns;
//! [`builtin_exercises`] returns the three seeded exercises as full
//! [`PronunciationExerciseRecord`]s so generated exercises can be appended
//! to the same list.

use crate::tutor::records::{ExerciseExample, PronunciationExerciseRecord};

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// An id/name pair backing a selection dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable identifier passed to the generation operations.
    pub id: &'static str,
    /// Human-readable display name shown in the UI.
    pub name: &'static str,
}

// ---------------------------------------------------------------------------
// Topics and levels
// ---------------------------------------------------------------------------

/// Conversation practice topics.
pub const TOPICS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "daily",
        name: "Daily Conversations",
    },
    CatalogEntry {
        id: "travel",
        name: "Travel & Tourism",
    },
    CatalogEntry {
        id: "business",
        name: "Business English",
    },
    CatalogEntry {
        id: "academic",
        name: "Academic Discussions",
    },
    CatalogEntry {
        id: "social",
        name: "Social Situations",
    },
];

/// Difficulty levels with CEFR band labels.
pub const LEVELS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "beginner",
        name: "Beginner (A1-A2)",
    },
    CatalogEntry {
        id: "intermediate",
        name: "Intermediate (B1-B2)",
    },
    CatalogEntry {
        id: "advanced",
        name: "Advanced (C1-C2)",
    },
];

/// Look up a catalog entry by id.
pub fn find_entry<'a>(entries: &'a [CatalogEntry], id: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|e| e.id == id)
}

// ---------------------------------------------------------------------------
// Seeded pronunciation exercises
// ---------------------------------------------------------------------------

/// The three exercises available before any generation happens.
///
/// Ids are unique; generated exercises are appended by the caller under its
/// own id-uniqueness rule.
pub fn builtin_exercises() -> Vec<PronunciationExerciseRecord> {
    vec![
        PronunciationExerciseRecord {
            id: "th".into(),
            title: "TH Sound Practice".into(),
            description: "Practice the \"th\" sound in English, which can be voiced (as in \
                          \"the\") or unvoiced (as in \"think\")."
                .into(),
            examples: examples(&[
                ("Think", "/θɪŋk/"),
                ("The", "/ðə/"),
                ("Three", "/θriː/"),
                ("Mother", "/ˈmʌðər/"),
                ("Both", "/boʊθ/"),
            ]),
        },
        PronunciationExerciseRecord {
            id: "r".into(),
            title: "R Sound Practice".into(),
            description: "Practice the English \"r\" sound, which is different from many \
                          other languages."
                .into(),
            examples: examples(&[
                ("Red", "/rɛd/"),
                ("Very", "/ˈvɛri/"),
                ("Around", "/əˈraʊnd/"),
                ("Bright", "/braɪt/"),
                ("Grow", "/ɡroʊ/"),
            ]),
        },
        PronunciationExerciseRecord {
            id: "vowels".into(),
            title: "Vowel Sounds".into(),
            description: "Practice the various vowel sounds in English.".into(),
            examples: examples(&[
                ("Seat", "/siːt/"),
                ("Sit", "/sɪt/"),
                ("Set", "/sɛt/"),
                ("Sat", "/sæt/"),
                ("Sought", "/sɔːt/"),
            ]),
        },
    ]
}

fn examples(pairs: &[(&str, &str)]) -> Vec<ExerciseExample> {
    pairs
        .iter()
        .map(|(text, phonetic)| ExerciseExample {
            text: (*text).into(),
            phonetic: (*phonetic).into(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutor::records::Validate;

    #[test]
    fn topic_and_level_ids_are_unique() {
        for entries in [TOPICS, LEVELS] {
            for (i, a) in entries.iter().enumerate() {
                for b in &entries[i + 1..] {
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn find_entry_matches_by_id() {
        let entry = find_entry(TOPICS, "travel").expect("travel topic exists");
        assert_eq!(entry.name, "Travel & Tourism");
        assert!(find_entry(LEVELS, "expert").is_none());
    }

    #[test]
    fn builtin_exercises_have_unique_ids_and_pass_validation() {
        let exercises = builtin_exercises();
        assert_eq!(exercises.len(), 3);

        for (i, exercise) in exercises.iter().enumerate() {
            assert!(exercise.validate().is_ok(), "{} invalid", exercise.id);
            assert_eq!(exercise.examples.len(), 5);
            for other in &exercises[i + 1..] {
                assert_ne!(exercise.id, other.id);
            }
        }
    }
}
