#[cfg(test)]
pub mod fixtures {
    /// Four long sentences with plenty of distinct content words
    pub fn photosynthesis_text() -> String {
        [
            "Photosynthesis occurs in chloroplasts using sunlight energy.",
            "Green plants capture light with chlorophyll pigments inside their leaves.",
            "The process converts carbon dioxide and water into glucose and oxygen!",
            "Without photosynthesis most ecosystems would collapse quickly?",
        ]
        .join(" ")
    }

    /// Two usable sentences built only from short words and stop words
    pub fn two_sentences_without_keywords() -> String {
        "It is a big red dog and it can run far. The cat was on the mat and he sat by it.".to_string()
    }

    pub fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::quiz::phrases::split_sentences;

    #[test]
    fn test_fixtures_photosynthesis_has_four_sentences() {
        assert_eq!(split_sentences(&photosynthesis_text()).len(), 4);
    }

    #[test]
    fn test_fixtures_short_word_text_has_two_sentences() {
        assert_eq!(split_sentences(&two_sentences_without_keywords()).len(), 2);
    }
}
