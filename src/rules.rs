//! The three checks a submitted word must pass, cheapest first.

use crate::dictionary::SpellChecker;
use crate::error::Rejection;

/// `word` has not been accepted yet this round. `used_words` holds uppercase entries.
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    let word = word.to_uppercase();
    !used_words.contains(&word)
}

/// Every letter of `word` can be taken from `root_word`, each root letter used at most once.
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut remaining: Vec<char> = root_word.to_uppercase().chars().collect();
    for letter in word.to_uppercase().chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(index) => {
                remaining.remove(index);
            }
            None => return false,
        }
    }
    true
}

#[must_use]
pub fn is_real(word: &str, checker: &dyn SpellChecker, language: &str) -> bool {
    checker.is_real_word(word, language)
}

/// Run originality, composability and dictionary checks in that order.
///
/// `word` must already be trimmed and non-empty.
///
/// # Errors
///
/// Returns the first [`Rejection`] hit.
pub fn validate(
    word: &str,
    root_word: &str,
    used_words: &[String],
    checker: &dyn SpellChecker,
    language: &str,
) -> Result<(), Rejection> {
    if !is_original(word, used_words) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_possible(word, root_word) {
        return Err(Rejection::NotComposable {
            root_word: root_word.to_string(),
        });
    }
    if !is_real(word, checker, language) {
        return Err(Rejection::NotARealWord);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSetDictionary;
    use std::cell::Cell;

    struct CountingChecker {
        calls: Cell<usize>,
        answer: bool,
    }

    impl SpellChecker for CountingChecker {
        fn is_real_word(&self, _word: &str, _language: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.answer
        }
    }

    #[test]
    fn test_is_original_ignores_case() {
        let used = vec!["FLOW".to_string()];
        assert!(!is_original("flow", &used));
        assert!(!is_original("FLOW", &used));
        assert!(is_original("SNOW", &used));
        assert!(is_original("flow", &[]));
    }

    #[test]
    fn test_is_possible_respects_multiplicity() {
        assert!(is_possible("FLOW", "SNOWFALL"));
        assert!(is_possible("fall", "SNOWFALL"));
        assert!(is_possible("SNOWFALL", "SNOWFALL"));
        assert!(!is_possible("FALLS", "SNOWFAL"));
        assert!(!is_possible("LLL", "SNOWFALL"));
        assert!(!is_possible("DOG", "CAT"));
    }

    #[test]
    fn test_is_possible_single_letter() {
        assert!(is_possible("a", "CAT"));
        assert!(!is_possible("z", "CAT"));
    }

    #[test]
    fn test_validate_order_already_used_first() {
        let checker = CountingChecker {
            calls: Cell::new(0),
            answer: false,
        };
        let used = vec!["DOG".to_string()];
        // DOG is neither composable from CAT nor real here, but originality wins
        assert_eq!(
            validate("dog", "CAT", &used, &checker, "en"),
            Err(Rejection::AlreadyUsed)
        );
        assert_eq!(checker.calls.get(), 0);
    }

    #[test]
    fn test_validate_skips_dictionary_when_not_composable() {
        let checker = CountingChecker {
            calls: Cell::new(0),
            answer: true,
        };
        assert_eq!(
            validate("DOG", "CAT", &[], &checker, "en"),
            Err(Rejection::NotComposable {
                root_word: "CAT".to_string()
            })
        );
        assert_eq!(checker.calls.get(), 0);
    }

    #[test]
    fn test_validate_not_a_real_word() {
        let dictionary = WordSetDictionary::new("en", ["flow"]);
        assert_eq!(
            validate("WOLFS", "SNOWFALL", &[], &dictionary, "en"),
            Err(Rejection::NotARealWord)
        );
        assert_eq!(validate("flow", "SNOWFALL", &[], &dictionary, "en"), Ok(()));
    }
}
