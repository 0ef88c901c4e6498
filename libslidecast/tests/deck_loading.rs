//! Deck loading from disk and navigation across a loaded deck

use std::fs;
use std::path::{Path, PathBuf};

use libslidecast::{Deck, DeckError, Navigation, Presentation, SlidecastError};
use tempfile::TempDir;

const DECK: &str = r#"
eyebrow = "Workshop"
title = "Ownership in Practice"
sources = ["The Book"]

[[slides]]
title = "Moves"
bullets = ["Values have one owner", "Assignment moves"]

[[slides]]
title = "Borrows"
bullets = ["Many shared or one mutable"]
footnote = "Checked at compile time"

[[slides]]
title = "Lifetimes"
bullets = []

[[slides]]
title = "Smart Pointers"
bullets = ["Box", "Rc", "Arc"]

[[slides]]
title = "Questions"
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_deck_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "deck.toml", DECK);

    let deck = Deck::load(Some(path.as_path())).unwrap();

    assert_eq!(deck.len(), 5);
    assert_eq!(deck.title(), "Ownership in Practice");
    assert_eq!(deck.get(3).unwrap().bullets, vec!["Box", "Rc", "Arc"]);
    assert_eq!(deck.get(1).unwrap().footnote(), Some("Checked at compile time"));
    assert_eq!(deck.get(4).unwrap().footnote(), None);
}

#[test]
fn test_missing_file_reports_path() {
    let err = Deck::load_from_path(Path::new("/nonexistent/slidecast/deck.toml")).unwrap_err();

    match err {
        SlidecastError::Deck(DeckError::Read { ref path, .. }) => {
            assert!(path.ends_with("deck.toml"));
        }
        ref other => panic!("Expected DeckError::Read, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.toml", "title = \n[[slides]");

    let err = Deck::load_from_path(&path).unwrap_err();
    assert!(matches!(err, SlidecastError::Deck(DeckError::Parse(_))));
}

#[test]
fn test_empty_slide_list_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.toml", "title = \"Nothing\"\nslides = []\n");

    let err = Deck::load_from_path(&path).unwrap_err();
    assert!(matches!(err, SlidecastError::Deck(DeckError::Empty)));
}

#[test]
fn test_walkthrough_over_loaded_deck() {
    let deck = Deck::from_toml(DECK).unwrap();
    let mut presentation = Presentation::new(deck.len());

    presentation.navigate(Navigation::Next);
    presentation.navigate(Navigation::Next);
    assert_eq!(deck.get(presentation.index()).unwrap().title, "Lifetimes");
    assert_eq!(presentation.progress(), 60);

    presentation.navigate(Navigation::First);
    assert_eq!(presentation.index(), 0);

    presentation.navigate(Navigation::Last);
    assert_eq!(deck.get(presentation.index()).unwrap().title, "Questions");
    assert_eq!(presentation.progress(), 100);

    presentation.navigate(Navigation::Next);
    assert_eq!(presentation.index(), 4);
}
