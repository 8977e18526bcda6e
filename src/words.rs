//! Word and category data model for the letter game.
//!
//! Word lists come from the external word service as `{script,
//! transliteration}` pairs; the older backend spells the keys `hindi` /
//! `english`, so both are accepted.

use rand::Rng;
use serde::Deserialize;
use std::error::Error;
use std::fmt;

/// Categories the backend ships word lists for. Used as the menu fallback
/// when the categories endpoint is unreachable.
pub const BUILTIN_CATEGORIES: [&str; 4] = ["fruits", "vegetables", "animals", "colors"];

/// One target word: the Devanagari script form and its transliteration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    #[serde(alias = "hindi")]
    pub script: String,
    #[serde(alias = "english")]
    pub transliteration: String,
}

/// A category's word list was empty or missing, so no round can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoWordsAvailable;

impl fmt::Display for NoWordsAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no word available for this category")
    }
}

impl Error for NoWordsAvailable {}

/// Split a script word into its collectible letters.
///
/// One letter per Unicode code point: matras and other combining signs are
/// separate letters, each with its own pronunciation clip, matching how the
/// backend's audio table is keyed.
pub fn letters(script: &str) -> Vec<char> {
    script.chars().collect()
}

/// Pick a word uniformly at random.
///
/// Callers guarantee `words` is non-empty (an empty list never gets past
/// `load_word_list`).
pub fn choose_word<'a, R: Rng>(words: &'a [WordEntry], rng: &mut R) -> &'a WordEntry {
    &words[rng.gen_range(0..words.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_letters_split_per_code_point() {
        // सेब is स + े (matra) + ब: three collectible letters.
        assert_eq!(letters("सेब"), vec!['स', 'े', 'ब']);
        assert_eq!(letters("आम"), vec!['आ', 'म']);
        assert!(letters("").is_empty());
    }

    #[test]
    fn test_choose_word_is_uniform_over_the_list() {
        let words = vec![
            WordEntry {
                script: "सेब".to_string(),
                transliteration: "seb".to_string(),
            },
            WordEntry {
                script: "आम".to_string(),
                transliteration: "aam".to_string(),
            },
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [false; 2];
        for _ in 0..100 {
            let w = choose_word(&words, &mut rng);
            let idx = words.iter().position(|x| x == w).unwrap();
            seen[idx] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_choose_word_single_entry_always_selected() {
        let words = vec![WordEntry {
            script: "सेब".to_string(),
            transliteration: "seb".to_string(),
        }];
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..10 {
            assert_eq!(choose_word(&words, &mut rng).script, "सेब");
        }
    }

    #[test]
    fn test_word_entry_accepts_both_key_spellings() {
        let modern: WordEntry =
            serde_json::from_str(r#"{"script": "सेब", "transliteration": "seb"}"#).unwrap();
        let legacy: WordEntry = serde_json::from_str(r#"{"hindi": "सेब", "english": "seb"}"#)
            .unwrap();
        assert_eq!(modern, legacy);
        assert_eq!(legacy.script, "सेब");
        assert_eq!(legacy.transliteration, "seb");
    }

    #[test]
    fn test_no_words_available_display() {
        assert_eq!(
            NoWordsAvailable.to_string(),
            "no word available for this category"
        );
    }
}
