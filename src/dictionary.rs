//! Real-word lookup.
//!
//! The game only needs a yes/no answer for a single word, so the dictionary
//! is a case-insensitive word set tagged with the language it covers.
//! Sources are tried in a fixed order by [`DictionarySearch::locate`]:
//! an explicit path, a per-user file under the data directory, the system
//! word list (English only, Unix), then the embedded English list.

use crate::error::ResourceError;
use crate::{debug_log, info_log};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LANGUAGE: &str = "en";

pub const EMBEDDED_ENGLISH_DICTIONARY: &str = include_str!("resources/dictionary_en.txt");

#[cfg(unix)]
const SYSTEM_WORDS_PATH: &str = "/usr/share/dict/words";

/// Anything that can tell whether a word is spelled correctly.
pub trait SpellChecker {
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    language: String,
    words: HashSet<String>,
}

fn is_english(language: &str) -> bool {
    let primary = language.split(['-', '_']).next().unwrap_or(language);
    primary.eq_ignore_ascii_case("en")
}

fn same_language(a: &str, b: &str) -> bool {
    let primary = |tag: &str| {
        tag.split(['-', '_'])
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase()
    };
    primary(a) == primary(b)
}

impl WordSetDictionary {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            language: language.to_string(),
            words,
        }
    }

    #[must_use]
    pub fn from_text(language: &str, data: &str) -> Self {
        Self::new(language, data.lines())
    }

    /// # Errors
    ///
    /// Returns [`ResourceError::Unavailable`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| ResourceError::unavailable(path, e))?;
        let dictionary = Self::from_text(language, &data);
        info_log!(
            "Loaded {} dictionary words for '{}' from {}",
            dictionary.len(),
            language,
            path.display()
        );
        Ok(dictionary)
    }

    #[must_use]
    pub fn embedded_english() -> Self {
        Self::from_text(DEFAULT_LANGUAGE, EMBEDDED_ENGLISH_DICTIONARY)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordSetDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        if !same_language(&self.language, language) {
            log::warn!(
                "Lookup for language '{language}' against a '{}' dictionary",
                self.language
            );
            return false;
        }
        let word = word.trim();
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return false;
        }
        let found = self.words.contains(&word.to_lowercase());
        debug_log!("Dictionary lookup '{}' -> {}", word, found);
        found
    }
}

/// Per-user dictionary directory: `<data dir>/word-scramble/dictionaries`.
#[must_use]
pub fn user_dictionary_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("word-scramble").join("dictionaries"))
}

/// Per-user dictionary location: `<data dir>/word-scramble/dictionaries/<language>.txt`.
#[must_use]
pub fn user_dictionary_path(language: &str) -> Option<PathBuf> {
    user_dictionary_dir().map(|dir| dir.join(format!("{language}.txt")))
}

#[cfg(unix)]
fn default_system_words() -> Option<PathBuf> {
    Some(PathBuf::from(SYSTEM_WORDS_PATH))
}

#[cfg(not(unix))]
fn default_system_words() -> Option<PathBuf> {
    None
}

/// Places searched for a dictionary when none is given explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySearch {
    /// Directory holding `<language>.txt` files
    pub user_dir: Option<PathBuf>,
    /// Newline-delimited English word list, usually `/usr/share/dict/words`
    pub system_words: Option<PathBuf>,
    /// Fall back to the embedded list for English
    pub embedded: bool,
}

impl Default for DictionarySearch {
    fn default() -> Self {
        Self {
            user_dir: user_dictionary_dir(),
            system_words: default_system_words(),
            embedded: true,
        }
    }
}

impl DictionarySearch {
    fn user_file(&self, language: &str) -> Option<PathBuf> {
        self.user_dir
            .as_ref()
            .map(|dir| dir.join(format!("{language}.txt")))
            .filter(|p| p.is_file())
    }

    fn system_file(&self, language: &str) -> Option<&Path> {
        self.system_words
            .as_deref()
            .filter(|p| is_english(language) && p.is_file())
    }

    /// Resolve the dictionary for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Unavailable`] if `explicit` or the per-user
    /// file cannot be read, and [`ResourceError::NoDictionary`] if no source
    /// covers `language`.
    pub fn locate(
        &self,
        explicit: Option<&Path>,
        language: &str,
    ) -> Result<WordSetDictionary, ResourceError> {
        if let Some(path) = explicit {
            return WordSetDictionary::from_file(language, path);
        }

        if let Some(path) = self.user_file(language) {
            return WordSetDictionary::from_file(language, path);
        }

        if let Some(path) = self.system_file(language) {
            match WordSetDictionary::from_file(language, path) {
                Ok(dictionary) => return Ok(dictionary),
                Err(e) => log::warn!("Ignoring system dictionary: {e}"),
            }
        }

        if self.embedded && is_english(language) {
            info_log!("Using embedded English dictionary");
            let mut dictionary = WordSetDictionary::embedded_english();
            dictionary.language = language.to_string();
            return Ok(dictionary);
        }

        Err(ResourceError::NoDictionary {
            language: language.to_string(),
        })
    }
}

/// Resolve the dictionary for `language` using the default search locations.
///
/// # Errors
///
/// See [`DictionarySearch::locate`].
pub fn locate_dictionary(
    explicit: Option<&Path>,
    language: &str,
) -> Result<WordSetDictionary, ResourceError> {
    DictionarySearch::default().locate(explicit, language)
}
