use anyhow::{Context, Result};
use std::io;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::dictionary::{WordSetDictionary, locate_dictionary};
use word_scramble::game_state::{GameSession, game_loop};
use word_scramble::logging::{default_log_path, init_logging};
use word_scramble::tui::TuiInterface;
use word_scramble::wordlist::load_word_list;

fn build_session(cli: &Cli) -> Result<GameSession<WordSetDictionary>> {
    let word_list =
        load_word_list(cli.word_list_path.as_deref()).context("Not able to read the word list")?;
    let dictionary = locate_dictionary(cli.dictionary_path.as_deref(), &cli.language)
        .context("Not able to load a dictionary")?;
    log::info!(
        "Loaded {} root words, {} dictionary words ({})",
        word_list.len(),
        dictionary.len(),
        cli.language
    );

    Ok(match cli.seed {
        Some(seed) => GameSession::with_seed(word_list, dictionary, &cli.language, seed),
        None => GameSession::new(word_list, dictionary, &cli.language),
    })
}

fn main() -> Result<()> {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path)
        && let Err(e) = init_logging(cli.log_level(), &path)
    {
        eprintln!("Logging disabled: {e}");
    }

    let mut session = match build_session(&cli) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e:#}");
            return Err(e);
        }
    };

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut session, &mut interface);
    } else {
        let mut interface = TuiInterface::new().context("Failed to initialize terminal")?;
        game_loop(&mut session, &mut interface);
        interface.cleanup().context("Failed to restore terminal")?;
    }

    Ok(())
}
