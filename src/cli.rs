use crate::dictionary::DEFAULT_LANGUAGE;
use crate::error::Rejection;
use crate::game_state::{GameInterface, GameState, UserAction};
use clap::{ArgAction, Parser};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Word Scramble: spell as many words as you can from the root word's letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub word_list_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary of accepted words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Dictionary language
    #[arg(short = 'l', long, default_value = DEFAULT_LANGUAGE, env = "WORD_SCRAMBLE_LANGUAGE")]
    pub language: String,

    /// Seed for picking root words
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line-oriented mode instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

pub enum LineInput {
    Word(String),
    Blank,
    Restart,
    Quit,
}

fn parse_line(line: &str) -> LineInput {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => LineInput::Blank,
        ":r" | ":restart" => LineInput::Restart,
        ":q" | ":quit" => LineInput::Quit,
        _ => LineInput::Word(trimmed.to_string()),
    }
}

/// Read one line. End of input and read errors both count as quitting.
pub fn read_line<R: BufRead>(reader: &mut R) -> LineInput {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => LineInput::Quit,
        Ok(_) => parse_line(&input),
        Err(e) => {
            log::error!("Failed to read input: {e}");
            LineInput::Quit
        }
    }
}

/// Line-oriented front end writing to any `Write`.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R, std::io::Stdout> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, std::io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            log::error!("Failed to write output: {e}");
        }
    }

    fn display_used_words(&mut self, state: &GameState) {
        let lines: Vec<String> = state
            .used_words()
            .iter()
            .map(|word| format!("  ({}) {word}", word.chars().count()))
            .collect();
        for line in lines {
            self.say(&line);
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_round(&mut self, state: &GameState) {
        self.say(&format!("\nRoot word: {}", state.root_word()));
        self.say("Enter a word (':restart' for a new word, ':quit' to exit):");
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_line(&mut self.reader) {
            LineInput::Word(word) => Some(UserAction::Submit(word)),
            LineInput::Restart => Some(UserAction::Restart),
            LineInput::Quit => Some(UserAction::Exit),
            LineInput::Blank => None,
        }
    }

    fn display_accepted(&mut self, word: &str, state: &GameState) {
        self.say(&format!("Accepted: {word}"));
        self.say(&format!("Words for {}:", state.root_word()));
        self.display_used_words(state);
    }

    fn display_rejection(&mut self, rejection: &Rejection, _state: &GameState) {
        self.say(&format!("{}: {}", rejection.title(), rejection.message()));
    }

    fn display_exit_message(&mut self) {
        self.say("Exiting.");
    }
}
