//! Static content the UI renders: practice catalogs and sample progress.

pub mod catalog;
pub mod progress;

pub use catalog::{builtin_exercises, find_entry, CatalogEntry, LEVELS, TOPICS};
pub use progress::{sample_progress, PracticeDay, SoundProgress, TopicProgress, UserProgress};
