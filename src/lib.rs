// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod rules;
pub mod tui;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use dictionary::{DictionarySearch, SpellChecker, WordSetDictionary, locate_dictionary};
pub use error::{Rejection, ResourceError};
pub use game_state::{
    Effect, GameEvent, GameInterface, GameSession, GameState, UserAction, game_loop, reduce,
};
pub use rules::{is_original, is_possible};
pub use wordlist::{WordList, load_word_list, load_word_list_from_file, load_word_list_from_str};
