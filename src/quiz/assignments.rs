use crate::quiz::vocabulary::ASSIGNMENT_TOPIC_FALLBACK;

const SUMMARY_ASSIGNMENT: &str =
    "Summarize the main ideas presented in the text and explain their significance.";
const EVALUATION_ASSIGNMENT: &str = "Critically evaluate the information provided and discuss potential limitations or areas for further exploration.";
const APPLICATION_ASSIGNMENT: &str = "Discuss the implications and real-world applications of the concepts presented in the text. Provide at least three examples.";

/// Builds the two essay prompts for a piece of text.
///
/// With fewer than two sentences there is nothing to anchor a topic on, so
/// both prompts are the generic ones.
pub fn generate_assignments(sentences: &[String], keywords: &[String]) -> [String; 2] {
    if sentences.len() < 2 {
        return [
            SUMMARY_ASSIGNMENT.to_string(),
            EVALUATION_ASSIGNMENT.to_string(),
        ];
    }

    let topic = keywords
        .first()
        .map(String::as_str)
        .unwrap_or(ASSIGNMENT_TOPIC_FALLBACK);
    let analysis = format!(
        "Write an essay analyzing the key concepts related to {} discussed in the text. Support your analysis with specific examples.",
        topic
    );

    let application = match keywords {
        [first, second, ..] => format!(
            "Compare and contrast {} and {}. How do these concepts relate to each other in the context provided?",
            first, second
        ),
        _ => APPLICATION_ASSIGNMENT.to_string(),
    };

    [analysis, application]
}
