use std::collections::HashSet;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::errors::{AppError, AppResult};
use crate::quiz::{phrases::DEFAULT_MAX_PHRASES, vocabulary};

#[derive(Clone, Debug)]
pub struct Config {
    pub max_phrases: usize,
    pub stop_words: HashSet<String>,
    pub concept_distractors: [String; 3],
    /// The comprehension question keeps its options in a fixed order unless this is set.
    pub shuffle_comprehension_options: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_phrases: DEFAULT_MAX_PHRASES,
            stop_words: vocabulary::default_stop_words(),
            concept_distractors: vocabulary::default_concept_distractors(),
            shuffle_comprehension_options: false,
        }
    }
}

impl Config {
    /// Reads `MAX_KEY_PHRASES`, `STOP_WORDS_FILE`, `CONCEPT_DISTRACTORS` and
    /// `SHUFFLE_COMPREHENSION_OPTIONS`, falling back to the built-in defaults.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with variables taken from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.max_phrases = lookup("MAX_KEY_PHRASES")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|max| *max > 0)
            .unwrap_or(DEFAULT_MAX_PHRASES);

        if let Some(path) = lookup("STOP_WORDS_FILE") {
            let file = File::open(&path)
                .map_err(|e| AppError::ConfigError(format!("cannot open '{}': {}", path, e)))?;
            config.stop_words.extend(read_stop_words(BufReader::new(file))?);
        }

        if let Some(raw) = lookup("CONCEPT_DISTRACTORS") {
            config.concept_distractors = parse_distractors(&raw)?;
        }

        config.shuffle_comprehension_options = lookup("SHUFFLE_COMPREHENSION_OPTIONS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(config)
    }
}

/// One stop word per line; blank lines and `#` comments are skipped.
pub fn read_stop_words<R: BufRead>(reader: R) -> AppResult<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_lowercase());
    }
    Ok(words)
}

fn parse_distractors(raw: &str) -> AppResult<[String; 3]> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    <[String; 3]>::try_from(items).map_err(|items| {
        AppError::ConfigError(format!(
            "CONCEPT_DISTRACTORS needs exactly 3 comma separated entries, got {}",
            items.len()
        ))
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.max_phrases, 10);
        assert!(config.stop_words.contains("those"));
        assert_eq!(config.concept_distractors[0], "irrelevant concept");
        assert!(!config.shuffle_comprehension_options);
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_config_from_lookup_with_no_variables() {
        let config = Config::from_lookup(lookup_from(&[])).expect("defaults should load");

        assert_eq!(config.max_phrases, DEFAULT_MAX_PHRASES);
        assert_eq!(config.stop_words, vocabulary::default_stop_words());
        assert!(!config.shuffle_comprehension_options);
    }

    #[test]
    fn test_config_from_lookup_reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAX_KEY_PHRASES", "4"),
            ("CONCEPT_DISTRACTORS", "wrong idea,side note,tangent"),
            ("SHUFFLE_COMPREHENSION_OPTIONS", "yes"),
        ]))
        .unwrap();

        assert_eq!(config.max_phrases, 4);
        assert_eq!(config.concept_distractors[2], "tangent");
        assert!(config.shuffle_comprehension_options);
    }

    #[test]
    fn test_config_from_lookup_ignores_bad_max_phrases() {
        for raw in ["0", "-3", "many"] {
            let config = Config::from_lookup(lookup_from(&[("MAX_KEY_PHRASES", raw)])).unwrap();
            assert_eq!(config.max_phrases, DEFAULT_MAX_PHRASES);
        }
    }

    #[test]
    fn test_config_from_lookup_rejects_bad_settings() {
        let missing_file = Config::from_lookup(lookup_from(&[(
            "STOP_WORDS_FILE",
            "/nonexistent/study-prompt-bot/stop_words.txt",
        )]));
        assert!(matches!(missing_file, Err(AppError::ConfigError(_))));

        let short_list = Config::from_lookup(lookup_from(&[("CONCEPT_DISTRACTORS", "one,two")]));
        assert!(matches!(short_list, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_read_stop_words_skips_comments_and_blanks() {
        let input = "# extra words\nPlants\n\n  leaves  \n";
        let words = read_stop_words(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["plants", "leaves"]);
    }

    #[test]
    fn test_parse_distractors() {
        let parsed = parse_distractors("wrong idea, side note ,tangent").unwrap();
        assert_eq!(parsed[1], "side note");

        let err = parse_distractors("only, two").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }
}
