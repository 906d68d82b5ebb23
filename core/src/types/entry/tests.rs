use super::*;

#[test]
fn entry_trims_both_sides() {
    let entry = Entry::from_parts("  Cat ", "\tAn animal\n").unwrap();
    assert_eq!(entry.word().as_str(), "Cat");
    assert_eq!(entry.definition().as_str(), "An animal");
}

#[test]
fn entry_rejects_blank_word() {
    assert!(Entry::from_parts("   ", "something").is_none());
    assert!(Entry::from_parts("", "something").is_none());
}

#[test]
fn entry_rejects_blank_definition() {
    assert!(Entry::from_parts("word", " ").is_none());
}

#[test]
fn folded_word_preserves_display_casing() {
    let entry = Entry::from_parts("ApPle", "a fruit").unwrap();
    assert_eq!(entry.word().as_str(), "ApPle");
    assert_eq!(entry.folded_word(), "apple");
}

#[test]
fn word_deserialize_validates() {
    let word: Result<Word, _> = serde_json::from_str("\"  \"");
    word.unwrap_err();

    let word: Word = serde_json::from_str("\" hello \"").unwrap();
    assert_eq!(word.as_str(), "hello");
}
