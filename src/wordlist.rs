use crate::error::ResourceError;
use crate::info_log;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORD_LIST: &str = include_str!("resources/start.txt");

/// Root word used when the word list has no entries.
pub const DEFAULT_ROOT_WORD: &str = "SNOWFALL";

/// Candidate root words, in file order. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
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

fn parse_line(line: &str) -> Option<String> {
    let word = line.trim();
    (!word.is_empty()).then(|| word.to_string())
}

#[must_use]
pub fn load_word_list_from_str(data: &str) -> WordList {
    WordList::new(data.lines().filter_map(parse_line).collect())
}

/// Read a newline-delimited word list from disk.
///
/// # Errors
///
/// Returns [`ResourceError::Unavailable`] if the file cannot be opened or read.
pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, ResourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ResourceError::unavailable(path, e))?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| ResourceError::unavailable(path, e))?;
        if let Some(word) = parse_line(&line) {
            words.push(word);
        }
    }
    info_log!("Loaded {} root words from {}", words.len(), path.display());
    Ok(WordList::new(words))
}

/// Load the word list from `path`, or the embedded `start.txt` when `None`.
///
/// # Errors
///
/// Returns [`ResourceError::Unavailable`] if an explicit path cannot be read.
pub fn load_word_list(path: Option<&Path>) -> Result<WordList, ResourceError> {
    match path {
        Some(path) => load_word_list_from_file(path),
        None => Ok(load_word_list_from_str(EMBEDDED_WORD_LIST)),
    }
}
