use crate::dictionary::SpellChecker;
use crate::error::Rejection;
use crate::rules::validate;
use crate::wordlist::{DEFAULT_ROOT_WORD, WordList};
use crate::{debug_log, info_log};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Snapshot of a round. Transitions produce a new value through [`reduce`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    root_word: String,
    used_words: Vec<String>,
    pending_input: String,
}

impl GameState {
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// False until the first round has started.
    #[must_use]
    pub fn is_round_active(&self) -> bool {
        !self.root_word.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    StartRound { root_word: String },
    InputChanged(String),
    /// Validate the current pending input
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RoundStarted(String),
    Accepted(String),
    Rejected(Rejection),
}

/// Apply `event` to `state`. The only outside call is the dictionary lookup.
#[must_use]
pub fn reduce(
    state: &GameState,
    event: GameEvent,
    checker: &dyn SpellChecker,
    language: &str,
) -> (GameState, Vec<Effect>) {
    match event {
        GameEvent::StartRound { root_word } => {
            let root_word = root_word.to_uppercase();
            let next = GameState {
                root_word: root_word.clone(),
                used_words: Vec::new(),
                pending_input: String::new(),
            };
            (next, vec![Effect::RoundStarted(root_word)])
        }
        GameEvent::InputChanged(input) => {
            let next = GameState {
                pending_input: input,
                ..state.clone()
            };
            (next, Vec::new())
        }
        GameEvent::Submit => {
            let word = state.pending_input.trim();
            if word.is_empty() || !state.is_round_active() {
                return (state.clone(), Vec::new());
            }

            match validate(word, &state.root_word, &state.used_words, checker, language) {
                Ok(()) => {
                    let word = word.to_uppercase();
                    let mut used_words = Vec::with_capacity(state.used_words.len() + 1);
                    used_words.push(word.clone());
                    used_words.extend(state.used_words.iter().cloned());
                    let next = GameState {
                        root_word: state.root_word.clone(),
                        used_words,
                        pending_input: String::new(),
                    };
                    (next, vec![Effect::Accepted(word)])
                }
                Err(rejection) => (state.clone(), vec![Effect::Rejected(rejection)]),
            }
        }
    }
}

/// Uniform pick from the list, uppercased; [`DEFAULT_ROOT_WORD`] for an empty list.
pub fn pick_root_word<R: rand::Rng + ?Sized>(word_list: &WordList, rng: &mut R) -> String {
    word_list
        .words()
        .choose(rng)
        .map_or_else(|| DEFAULT_ROOT_WORD.to_string(), |w| w.to_uppercase())
}

/// Owns the word list, the dictionary and the current [`GameState`].
pub struct GameSession<S> {
    word_list: WordList,
    checker: S,
    language: String,
    rng: StdRng,
    state: GameState,
}

impl<S: SpellChecker> GameSession<S> {
    pub fn new(word_list: WordList, checker: S, language: &str) -> Self {
        Self::with_rng(word_list, checker, language, StdRng::from_os_rng())
    }

    /// Session whose root word picks are reproducible.
    pub fn with_seed(word_list: WordList, checker: S, language: &str, seed: u64) -> Self {
        Self::with_rng(word_list, checker, language, StdRng::seed_from_u64(seed))
    }

    fn with_rng(word_list: WordList, checker: S, language: &str, rng: StdRng) -> Self {
        Self {
            word_list,
            checker,
            language: language.to_string(),
            rng,
            state: GameState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    fn dispatch(&mut self, event: GameEvent) -> Vec<Effect> {
        debug_log!("dispatch() - {:?}", event);
        let (next, effects) = reduce(&self.state, event, &self.checker, &self.language);
        self.state = next;
        effects
    }

    /// Begin a new round with a random root word. Returns the root word.
    pub fn start_round(&mut self) -> &str {
        let root_word = pick_root_word(&self.word_list, &mut self.rng);
        info_log!("Starting round with root word '{}'", root_word);
        self.dispatch(GameEvent::StartRound { root_word });
        self.state.root_word()
    }

    pub fn set_input(&mut self, input: &str) {
        self.dispatch(GameEvent::InputChanged(input.to_string()));
    }

    /// Validate `candidate` and record it on success.
    ///
    /// Returns `Ok(None)` when the candidate is blank, `Ok(Some(word))` with the
    /// uppercased word when accepted.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reason; the round is left unchanged apart
    /// from the pending input now holding `candidate`.
    pub fn submit(&mut self, candidate: &str) -> Result<Option<String>, Rejection> {
        self.set_input(candidate);
        let effects = self.dispatch(GameEvent::Submit);
        match effects.into_iter().next() {
            Some(Effect::Accepted(word)) => {
                info_log!("Accepted '{}'", word);
                Ok(Some(word))
            }
            Some(Effect::Rejected(rejection)) => {
                info_log!("Rejected '{}': {}", candidate.trim(), rejection);
                Err(rejection)
            }
            Some(Effect::RoundStarted(_)) | None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    Restart,
    Exit,
}

/// Front-end seam for [`game_loop`].
pub trait GameInterface {
    fn display_round(&mut self, state: &GameState);
    /// `None` when there is nothing to act on yet.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &str, state: &GameState);
    fn display_rejection(&mut self, rejection: &Rejection, state: &GameState);
    fn display_exit_message(&mut self);
}

pub fn game_loop<S: SpellChecker, I: GameInterface>(
    session: &mut GameSession<S>,
    interface: &mut I,
) {
    session.start_round();
    interface.display_round(session.state());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::Restart => {
                session.start_round();
                interface.display_round(session.state());
            }
            UserAction::Submit(candidate) => match session.submit(&candidate) {
                Ok(Some(word)) => interface.display_accepted(&word, session.state()),
                Ok(None) => {}
                Err(rejection) => interface.display_rejection(&rejection, session.state()),
            },
        }
    }
}
