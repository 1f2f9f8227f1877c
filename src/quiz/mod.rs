pub mod assignments;
pub mod phrases;
pub mod questions;
pub mod vocabulary;

use log::debug;
use rand::Rng;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub use assignments::generate_assignments;
pub use phrases::extract_key_phrases;
pub use questions::generate_quiz_questions;

/// Everything produced by one "Generate" action.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StudyPack {
    pub assignments: [String; 2],
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestion {
    pub fn new(question: String, options: Vec<String>, answer: String) -> Self {
        debug_assert!(options.contains(&answer), "answer must be one of the options");
        Self {
            question,
            options,
            answer,
        }
    }

    /// Options prefixed with `A.`, `B.`, ... one per line.
    pub fn lettered_options(&self) -> String {
        self.options
            .iter()
            .zip('A'..='Z')
            .map(|(option, letter)| format!("{}. {}", letter, option))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Maps a reply to the option it picks: either the option text itself or
    /// its letter (case insensitive). Exact text wins over a letter.
    pub fn resolve_reply<'a>(&'a self, reply: &'a str) -> &'a str {
        let reply = reply.trim();
        if self.options.iter().any(|option| option == reply) {
            return reply;
        }

        let mut chars = reply.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            let index = (letter.to_ascii_uppercase() as usize).wrapping_sub('A' as usize);
            if let Some(option) = self.options.get(index) {
                return option;
            }
        }
        reply
    }

    pub fn is_correct(&self, reply: &str) -> bool {
        self.resolve_reply(reply) == self.answer
    }
}

/// Runs the whole pipeline for one piece of text: input checks, key phrase
/// extraction, assignments and quiz.
///
/// Nothing is generated when the text is blank or too thin to pull sentences
/// and keywords out of.
pub fn generate_study_pack<R: Rng + ?Sized>(
    text: &str,
    config: &Config,
    rng: &mut R,
) -> AppResult<StudyPack> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let sentences = phrases::split_sentences(text);
    let keywords = phrases::extract_keywords(text, config.max_phrases, &config.stop_words);
    debug!(
        "Extracted {} sentences and {} keywords",
        sentences.len(),
        keywords.len()
    );

    if sentences.is_empty() || keywords.is_empty() {
        return Err(AppError::InsufficientText);
    }

    Ok(StudyPack {
        assignments: generate_assignments(&sentences, &keywords),
        questions: generate_quiz_questions(&sentences, &keywords, config, rng),
    })
}
