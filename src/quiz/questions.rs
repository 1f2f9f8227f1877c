use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::quiz::vocabulary::{
    BLANK, COMPREHENSION_DISTRACTORS, COMPREHENSION_TOPIC_FALLBACK, MAIN_SUBJECT_DISTRACTORS,
    MAIN_SUBJECT_FALLBACK,
};
use crate::quiz::QuizQuestion;

pub const QUESTION_COUNT: usize = 3;
/// Sentences with this many words or fewer are not worth blanking out.
const MIN_BLANKABLE_WORDS: usize = 5;
const LONG_WORD_CHARS: usize = 4;

/// Generates exactly [`QUESTION_COUNT`] multiple choice questions.
///
/// The sentence-based questions need at least three sentences; anything
/// missing is topped up with the generic "main subject" question.
pub fn generate_quiz_questions<R: Rng + ?Sized>(
    sentences: &[String],
    keywords: &[String],
    config: &Config,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let mut questions = Vec::with_capacity(QUESTION_COUNT);

    if sentences.len() >= 3 {
        if let Some(question) = fill_in_blank_question(&sentences[..3], keywords, rng) {
            questions.push(question);
        }
        if let Some(question) = key_concept_question(keywords, &config.concept_distractors, rng) {
            questions.push(question);
        }
        questions.push(comprehension_question(
            keywords,
            config.shuffle_comprehension_options,
            rng,
        ));
    }

    while questions.len() < QUESTION_COUNT {
        questions.push(main_subject_question(keywords));
    }
    questions.truncate(QUESTION_COUNT);

    questions
}

fn fill_in_blank_question<R: Rng + ?Sized>(
    candidates: &[String],
    keywords: &[String],
    rng: &mut R,
) -> Option<QuizQuestion> {
    let sentence = candidates.choose(rng)?;
    let words = sentence.split_whitespace().collect::<Vec<_>>();
    if words.len() <= MIN_BLANKABLE_WORDS {
        return None;
    }

    let long_words = words
        .iter()
        .copied()
        .filter(|w| w.chars().count() > LONG_WORD_CHARS)
        .take(3)
        .collect::<Vec<_>>();
    let pool = if long_words.is_empty() {
        &words
    } else {
        &long_words
    };
    let important_word = *pool.choose(rng)?;
    let lowered = important_word.to_lowercase();

    let options = {
        let mut options = vec![important_word.to_string()];
        options.extend(
            keywords
                .iter()
                .filter(|k| **k != lowered)
                .take(3)
                .cloned(),
        );
        options.shuffle(rng);
        options
    };

    Some(QuizQuestion::new(
        format!(
            "Complete the following statement: {}",
            sentence.replacen(important_word, BLANK, 1)
        ),
        options,
        important_word.to_string(),
    ))
}

fn key_concept_question<R: Rng + ?Sized>(
    keywords: &[String],
    distractors: &[String; 3],
    rng: &mut R,
) -> Option<QuizQuestion> {
    let correct = keywords.first()?;

    let mut options = vec![correct.clone()];
    options.extend(distractors.iter().cloned());
    options.shuffle(rng);

    Some(QuizQuestion::new(
        "Which of the following is a key concept discussed in the text?".to_string(),
        options,
        correct.clone(),
    ))
}

fn comprehension_question<R: Rng + ?Sized>(
    keywords: &[String],
    shuffle: bool,
    rng: &mut R,
) -> QuizQuestion {
    let topic = keywords
        .first()
        .map(String::as_str)
        .unwrap_or(COMPREHENSION_TOPIC_FALLBACK);
    let correct = format!("The text primarily discusses {}", topic);

    let mut options = vec![correct.clone()];
    options.extend(COMPREHENSION_DISTRACTORS.iter().map(|d| d.to_string()));
    if shuffle {
        options.shuffle(rng);
    }

    QuizQuestion::new(
        "Based on the text, which statement is most accurate?".to_string(),
        options,
        correct,
    )
}

fn main_subject_question(keywords: &[String]) -> QuizQuestion {
    let correct = keywords
        .first()
        .cloned()
        .unwrap_or_else(|| MAIN_SUBJECT_FALLBACK.to_string());

    let mut options = vec![correct.clone()];
    options.extend(MAIN_SUBJECT_DISTRACTORS.iter().map(|d| d.to_string()));

    QuizQuestion::new(
        "What is the main subject matter of the provided text?".to_string(),
        options,
        correct,
    )
}
