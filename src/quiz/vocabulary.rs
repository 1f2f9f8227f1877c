use std::collections::HashSet;

/// Common English function words that never count as key phrases.
pub const STOP_WORDS: [&str; 39] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can", "this", "that", "these",
    "those",
];

/// Marker that replaces the hidden word in a fill-in-the-blank stem.
pub const BLANK: &str = "______";

// Key concept question
pub const CONCEPT_DISTRACTORS: [&str; 3] = ["irrelevant concept", "unrelated topic", "minor detail"];

// Comprehension question, correct statement always goes first
pub const COMPREHENSION_DISTRACTORS: [&str; 3] = [
    "The text focuses on unrelated topics",
    "The text provides no clear information",
    "The text contradicts itself throughout",
];

// Padding question
pub const MAIN_SUBJECT_DISTRACTORS: [&str; 3] = [
    "Unrelated subjects",
    "No clear subject",
    "Multiple unconnected topics",
];

pub const ASSIGNMENT_TOPIC_FALLBACK: &str = "the main topic";
pub const COMPREHENSION_TOPIC_FALLBACK: &str = "the topic";
pub const MAIN_SUBJECT_FALLBACK: &str = "The specified topic";

pub fn default_stop_words() -> HashSet<String> {
    STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

pub fn default_concept_distractors() -> [String; 3] {
    CONCEPT_DISTRACTORS.map(String::from)
}
