//! Readability Features
//!
//! Five classic readability scores of a message text. Counting rules
//! (punctuation stripping, sentence regex, short-sentence filtering,
//! rounding) follow the `textstat` conventions the model was trained on,
//! so scores line up with the training data.
//!
//! Syllables are counted as hyphenation points plus one, using the TeX
//! en-US Knuth-Liang patterns.

use std::collections::HashSet;

use hyphenation::{Hyphenator, Language, Load, Standard};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// WORD LISTS & PATTERNS
// ============================================================================

/// Dale-Chall familiar words (lowercase)
static EASY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    include_str!("../../../data/dale_chall_easy_words.txt")
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
});

static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("sentence pattern"));

static DIFFICULT_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w='‘]+").expect("token pattern"));

/// en-US hyphenation patterns, embedded at build time
static EN_US: Lazy<Standard> = Lazy::new(|| {
    Standard::from_embedded(Language::EnglishUS).expect("embedded en-US patterns")
});

/// Syllable count at which a word is "complex" (Fog, SMOG)
const POLYSYLLABLE_THRESHOLD: usize = 3;

/// Syllable count at which an unfamiliar word is difficult (Dale-Chall)
const DALE_CHALL_THRESHOLD: usize = 2;

/// Sentences of this many words or fewer are not counted
const MIN_SENTENCE_WORDS: usize = 2;

// ============================================================================
// TEXT STATISTICS
// ============================================================================

/// Raw counts over a text, computed once and shared by every score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    pub polysyllables: usize,
    pub characters: usize,
    /// Unique unfamiliar words with at least 3 syllables
    pub complex_unfamiliar: usize,
    /// Unique unfamiliar words with at least 2 syllables
    pub difficult: usize,
}

impl TextStats {
    pub fn new(text: &str) -> Self {
        let words = lexicon(text);

        let syllable_counts: Vec<usize> = words
            .iter()
            .map(|w| count_syllables(&w.to_lowercase()))
            .collect();

        let unfamiliar_syllables: Vec<usize> = DIFFICULT_TOKEN_RE
            .find_iter(&text.to_lowercase())
            .map(|m| m.as_str().to_string())
            .filter(|w| !EASY_WORDS.contains(w.as_str()))
            .collect::<HashSet<String>>()
            .iter()
            .map(|w| count_syllables(w))
            .collect();

        Self {
            words: words.len(),
            sentences: count_sentences(text),
            syllables: syllable_counts.iter().sum(),
            polysyllables: syllable_counts
                .iter()
                .filter(|&&s| s >= POLYSYLLABLE_THRESHOLD)
                .count(),
            characters: text.chars().filter(|&c| c != ' ').count(),
            complex_unfamiliar: unfamiliar_syllables
                .iter()
                .filter(|&&s| s >= POLYSYLLABLE_THRESHOLD)
                .count(),
            difficult: unfamiliar_syllables
                .iter()
                .filter(|&&s| s >= DALE_CHALL_THRESHOLD)
                .count(),
        }
    }

    /// Words per sentence, rounded to 1 decimal
    pub fn avg_sentence_length(&self) -> f64 {
        legacy_round(self.words as f64 / self.sentences as f64, 1)
    }

    /// Syllables per word, rounded to 1 decimal (0 for no words)
    pub fn avg_syllables_per_word(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        legacy_round(self.syllables as f64 / self.words as f64, 1)
    }

    pub fn flesch_reading_ease(&self) -> f64 {
        let score = 206.835
            - 1.015 * self.avg_sentence_length()
            - 84.6 * self.avg_syllables_per_word();
        legacy_round(score, 2)
    }

    pub fn gunning_fog(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        let pct_complex = self.complex_unfamiliar as f64 / self.words as f64 * 100.0;
        legacy_round(0.4 * (self.avg_sentence_length() + pct_complex), 2)
    }

    /// Only defined for three sentences or more
    pub fn smog_index(&self) -> f64 {
        if self.sentences < 3 {
            return 0.0;
        }
        let ratio = self.polysyllables as f64 / self.sentences as f64;
        legacy_round(1.043 * (30.0 * ratio).sqrt() + 3.1291, 1)
    }

    pub fn automated_readability_index(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        let chars_per_word = legacy_round(self.characters as f64 / self.words as f64, 2);
        let words_per_sentence = legacy_round(self.words as f64 / self.sentences as f64, 2);
        legacy_round(4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43, 1)
    }

    pub fn dale_chall_score(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        let familiar = self.words as f64 - self.difficult as f64;
        let pct_difficult = 100.0 - familiar / self.words as f64 * 100.0;

        let mut score = 0.1579 * pct_difficult + 0.0496 * self.avg_sentence_length();
        if pct_difficult > 5.0 {
            score += 3.6365;
        }
        legacy_round(score, 2)
    }
}

// ============================================================================
// SCORES
// ============================================================================

/// All five readability scores of one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub dale_chall_score: f64,
}

impl ReadabilityScores {
    pub fn compute(text: &str) -> Self {
        let stats = TextStats::new(text);
        Self {
            flesch_reading_ease: stats.flesch_reading_ease(),
            gunning_fog: stats.gunning_fog(),
            smog_index: stats.smog_index(),
            automated_readability_index: stats.automated_readability_index(),
            dale_chall_score: stats.dale_chall_score(),
        }
    }
}

pub fn flesch_reading_ease(text: &str) -> f64 {
    TextStats::new(text).flesch_reading_ease()
}

pub fn gunning_fog(text: &str) -> f64 {
    TextStats::new(text).gunning_fog()
}

pub fn smog_index(text: &str) -> f64 {
    TextStats::new(text).smog_index()
}

pub fn automated_readability_index(text: &str) -> f64 {
    TextStats::new(text).automated_readability_index()
}

pub fn dale_chall_score(text: &str) -> f64 {
    TextStats::new(text).dale_chall_score()
}

// ============================================================================
// COUNTING HELPERS
// ============================================================================

/// Words after stripping punctuation (apostrophes survive)
fn lexicon(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c == '\'' || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Sentences of more than two words, at least 1
fn count_sentences(text: &str) -> usize {
    let counted = SENTENCE_RE
        .find_iter(text)
        .filter(|m| lexicon(m.as_str()).len() > MIN_SENTENCE_WORDS)
        .count();
    counted.max(1)
}

/// Hyphenation points plus one, minimum 1 per word
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 1;
    }
    EN_US.hyphenate(word).breaks.len() + 1
}

/// `floor(x * 10^p ± 0.5) / 10^p`, the rounding the training scores used.
/// Negative values round one step further down.
fn legacy_round(value: f64, points: i32) -> f64 {
    let p = 10f64.powi(points);
    ((value * p) + 0.5f64.copysign(value)).floor() / p
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_empty_text() {
        let scores = ReadabilityScores::compute("");
        assert!(approx(scores.flesch_reading_ease, 206.84));
        assert_eq!(scores.gunning_fog, 0.0);
        assert_eq!(scores.smog_index, 0.0);
        assert_eq!(scores.automated_readability_index, 0.0);
        assert_eq!(scores.dale_chall_score, 0.0);
    }

    #[test]
    fn test_simple_sentence_stats() {
        let stats = TextStats::new("The sky is blue.");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.syllables, 4);
        assert_eq!(stats.characters, 13);
        assert_eq!(stats.difficult, 0);
    }

    #[test]
    fn test_simple_sentence_scores() {
        let scores = ReadabilityScores::compute("The sky is blue.");
        assert!((scores.flesch_reading_ease - 118.18).abs() < 0.011);
        assert!(approx(scores.gunning_fog, 1.6));
        assert_eq!(scores.smog_index, 0.0);
        assert!(approx(scores.automated_readability_index, -4.2));
        assert!(approx(scores.dale_chall_score, 0.2));
    }

    #[test]
    fn test_short_sentences_ignored() {
        // "Hi there." has two words and does not count
        let stats = TextStats::new("Hi there. The dog ran home fast.");
        assert_eq!(stats.sentences, 1);
        assert_eq!(TextStats::new("Hello").sentences, 1);
    }

    #[test]
    fn test_smog_needs_three_sentences() {
        let two = "The committee considered everything. Nobody anticipated consequences.";
        assert_eq!(smog_index(two), 0.0);

        let three = "The committee considered every possibility. \
                     Nobody anticipated the consequences today. \
                     Everybody celebrated the unexpected victory.";
        assert!(smog_index(three) > 3.1291);
    }

    #[test]
    fn test_unfamiliar_words_raise_dale_chall() {
        let easy = dale_chall_score("The dog ran to the big red barn.");
        let hard = dale_chall_score("Bureaucratic procrastination undermines institutional legitimacy.");
        assert!(hard > easy);
        assert!(hard > 3.6365);
    }

    #[test]
    fn test_one_syllable_unfamiliar_words_are_not_difficult() {
        // "jazz", "gig" and "played" are off the familiar list but monosyllabic
        let stats = TextStats::new("The jazz band played a gig.");
        assert_eq!(stats.words, 6);
        assert_eq!(stats.difficult, 0);
        assert!(approx(dale_chall_score("The jazz band played a gig."), 0.3));
    }

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("blue"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("played"), 1);
        assert_eq!(count_syllables("hmm"), 1);
        assert_eq!(count_syllables("123"), 1);
        assert_eq!(count_syllables(""), 1);
        assert_eq!(count_syllables("hyphenation"), 3);
    }

    #[test]
    fn test_count_syllables_splits_vowel_hiatus() {
        // Adjacent vowels in separate syllables are one vowel group
        assert_eq!(count_syllables("being"), 2);
        assert!(count_syllables("creation") >= 2);
        assert!(count_syllables("business") <= 2);
    }

    #[test]
    fn test_legacy_round() {
        assert_eq!(legacy_round(206.835, 2), 206.84);
        assert_eq!(legacy_round(-4.1225, 1), -4.2);
        assert_eq!(legacy_round(2.25, 1), 2.3);
    }

    #[test]
    fn test_deterministic() {
        let text = "Trust me, this transfer is completely legitimate and urgent!";
        assert_eq!(ReadabilityScores::compute(text), ReadabilityScores::compute(text));
    }

    #[test]
    fn test_easy_word_list_loaded() {
        assert!(EASY_WORDS.len() > 2500);
        assert!(EASY_WORDS.contains("the"));
        assert!(!EASY_WORDS.contains("bureaucratic"));
    }
}
