//! Error types for resource loading and word validation.

use std::io;
use std::path::PathBuf;

/// Errors raised while loading the word list or a dictionary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResourceError {
    /// The resource file is missing or could not be read
    #[error("resource unavailable: {}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No dictionary could be located for the requested language
    #[error("no dictionary available for language '{language}'")]
    NoDictionary { language: String },
}

impl ResourceError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }
}

/// Why a submitted word was turned down.
///
/// Rejections are recovered locally: the round state is left untouched and
/// the front end shows `title()` and `message()` to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The word was already accepted this round
    #[error("Word used already")]
    AlreadyUsed,

    /// The word cannot be spelled from the root word's letters
    #[error("Word not possible")]
    NotComposable { root_word: String },

    /// The dictionary does not know the word
    #[error("Word not recognized")]
    NotARealWord,
}

impl Rejection {
    #[must_use]
    pub fn title(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotComposable { root_word } => {
                format!("You can't spell that word from '{root_word}'!")
            }
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
        }
    }
}
