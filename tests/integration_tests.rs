// Integration tests for the word-scramble application
// These tests verify that all modules work together correctly

use std::io::Cursor;
use word_scramble::cli::CliInterface;
use word_scramble::*;

fn single_root(word: &str) -> WordList {
    WordList::new(vec![word.to_string()])
}

fn english() -> WordSetDictionary {
    WordSetDictionary::embedded_english()
}

/// Play `input` through the CLI front end and return what it printed.
fn play(session: &mut GameSession<WordSetDictionary>, input: &str) -> String {
    let mut interface = CliInterface::with_writer(Cursor::new(input.to_string()), Vec::new());
    game_loop(session, &mut interface);
    String::from_utf8(interface.into_writer()).unwrap()
}

#[test]
fn test_end_to_end_accept_and_reject() {
    let mut session = GameSession::with_seed(single_root("snowfall"), english(), "en", 1);
    let output = play(&mut session, "flow\nFLOW\ndog\nwolfsa\n:quit\n");

    assert!(output.contains("Root word: SNOWFALL"));
    assert!(output.contains("Accepted: FLOW"));
    assert!(output.contains("Word used already: Be more original"));
    assert!(output.contains("Word not possible: You can't spell that word from 'SNOWFALL'!"));
    assert!(output.contains("Word not recognized"));
    assert!(output.trim_end().ends_with("Exiting."));
    assert_eq!(session.state().used_words(), ["FLOW"]);
}

#[test]
fn test_used_words_are_most_recent_first_with_lengths() {
    let mut session = GameSession::with_seed(single_root("snowfall"), english(), "en", 1);
    let output = play(&mut session, "flow\nsnow\nfall\n");

    assert_eq!(session.state().used_words(), ["FALL", "SNOW", "FLOW"]);
    assert!(output.contains("  (4) FALL\n  (4) SNOW\n  (4) FLOW\n"));
}

#[test]
fn test_not_composable_from_cat() {
    let mut session = GameSession::with_seed(single_root("cat"), english(), "en", 5);
    session.start_round();
    assert_eq!(
        session.submit("DOG"),
        Err(Rejection::NotComposable {
            root_word: "CAT".to_string()
        })
    );
    assert!(session.state().used_words().is_empty());
}

#[test]
fn test_duplicate_submission_is_idempotent() {
    let mut session = GameSession::with_seed(single_root("snowfall"), english(), "en", 2);
    session.start_round();
    assert!(session.submit("wolf").is_ok());
    let before = session.state().used_words().len();
    assert_eq!(session.submit("Wolf"), Err(Rejection::AlreadyUsed));
    assert_eq!(session.submit(" WOLF "), Err(Rejection::AlreadyUsed));
    assert_eq!(session.state().used_words().len(), before);
}

#[test]
fn test_restart_clears_used_words() {
    let mut session = GameSession::with_seed(single_root("snowfall"), english(), "en", 3);
    let output = play(&mut session, "flow\n:restart\n");

    assert_eq!(output.matches("Root word: SNOWFALL").count(), 2);
    assert!(session.state().used_words().is_empty());
    assert_eq!(session.state().root_word(), "SNOWFALL");
}

#[test]
fn test_empty_word_list_uses_default_root() {
    let mut session = GameSession::with_seed(load_word_list_from_str("\n\n"), english(), "en", 4);
    assert_eq!(session.start_round(), "SNOWFALL");
}

#[test]
fn test_blank_lines_do_nothing() {
    let mut session = GameSession::with_seed(single_root("snowfall"), english(), "en", 6);
    let output = play(&mut session, "\n   \n\t\n:q\n");

    assert!(!output.contains("Accepted"));
    assert!(!output.contains("Word "));
    assert!(session.state().used_words().is_empty());
}

#[test]
fn test_root_word_itself_is_accepted() {
    let mut session = GameSession::with_seed(single_root("snowfall"), english(), "en", 7);
    session.start_round();
    assert_eq!(session.submit("snowfall"), Ok(Some("SNOWFALL".to_string())));
}

#[test]
fn test_rejection_keeps_pending_input() {
    let mut session = GameSession::with_seed(single_root("snowfall"), english(), "en", 8);
    session.start_round();
    assert!(session.submit("flaws").is_ok());
    assert_eq!(session.state().pending_input(), "");
    assert!(session.submit("fffff").is_err());
    assert_eq!(session.state().pending_input(), "fffff");
}

#[test]
fn test_accepted_words_are_composable_from_root() {
    let list = load_word_list(None).unwrap();
    let dictionary = english();
    let mut session = GameSession::with_seed(list, dictionary.clone(), "en", 11);

    for _ in 0..10 {
        let root = session.start_round().to_string();
        // Submit every substring of the root word
        for len in 1..=root.len() {
            for start in 0..=(root.len() - len) {
                let _ = session.submit(&root[start..start + len]);
            }
        }
        let used = session.state().used_words();
        for word in used {
            assert!(is_possible(word, &root), "{word} not from {root}");
            assert!(dictionary.is_real_word(word, "en"));
        }
        let mut sorted = used.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), used.len());
    }
}

#[test]
fn test_custom_word_list_and_dictionary_files() {
    use std::fs;

    let temp_dir = std::env::temp_dir();
    let list_path = temp_dir.join("word_scramble_it_start.txt");
    let dict_path = temp_dir.join("word_scramble_it_dictionary.txt");
    fs::write(&list_path, "pancakes\n").unwrap();
    fs::write(&dict_path, "cake\npan\nsnake\n").unwrap();

    let list = load_word_list_from_file(&list_path).unwrap();
    let dictionary = locate_dictionary(Some(dict_path.as_path()), "en").unwrap();
    let mut session = GameSession::with_seed(list, dictionary, "en", 0);
    let output = play(&mut session, "cake\npeak\nsnake\n");

    assert!(output.contains("Root word: PANCAKES"));
    assert!(output.contains("Accepted: CAKE"));
    assert!(output.contains("Word not recognized"));
    assert_eq!(session.state().used_words(), ["SNAKE", "CAKE"]);

    fs::remove_file(&list_path).unwrap();
    fs::remove_file(&dict_path).unwrap();
}

#[test]
fn test_missing_word_list_is_resource_error() {
    let path = std::env::temp_dir().join("word_scramble_it_missing.txt");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(
        load_word_list(Some(path.as_path())),
        Err(ResourceError::Unavailable { .. })
    ));
}

#[test]
fn test_reducer_drives_a_round() {
    let dictionary = english();
    let (state, effects) = reduce(
        &GameState::default(),
        GameEvent::StartRound {
            root_word: "snowfall".to_string(),
        },
        &dictionary,
        "en",
    );
    assert_eq!(effects, vec![Effect::RoundStarted("SNOWFALL".to_string())]);

    let (state, _) = reduce(&state, GameEvent::InputChanged("flow".into()), &dictionary, "en");
    let (state, effects) = reduce(&state, GameEvent::Submit, &dictionary, "en");
    assert_eq!(effects, vec![Effect::Accepted("FLOW".to_string())]);
    assert_eq!(state.used_words(), ["FLOW"]);
}

#[test]
fn test_common_plurals_and_sub_words_are_accepted() {
    let cases = [
        ("snowfall", &["falls", "flows", "flaws", "owls"][..]),
        ("accident", &["acid", "dance"][..]),
        ("absolute", &["bust", "blues", "tubes", "lotus"][..]),
    ];
    for (root, words) in cases {
        let mut session = GameSession::with_seed(single_root(root), english(), "en", 9);
        session.start_round();
        for word in words {
            assert_eq!(
                session.submit(word),
                Ok(Some(word.to_uppercase())),
                "{word} from {root}"
            );
        }
        assert_eq!(session.state().used_words().len(), words.len());
    }
}
