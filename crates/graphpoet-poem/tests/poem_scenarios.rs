//! End-to-end poem scenarios
//!
//! Builds graphs from small corpora and checks the assembled poems:
//! 1. The canonical Mugar corpus inserts "of" between "Test" and "the"
//! 2. Phrases with no two-edge connection pass through untouched
//! 3. Punctuation stays part of a word, on both the corpus and input side
//! 4. Both graph backends produce identical poems

use graphpoet_poem::prelude::*;

fn poet_for(text: &str, backend: BackendKind) -> GraphPoet {
    GraphPoet::from_corpus(&Corpus::from_text("scenario", text), backend).unwrap()
}

fn poem_both(text: &str, input: &str) -> String {
    let pet = poet_for(text, BackendKind::PetGraph).poem(input);
    let adj = poet_for(text, BackendKind::Adjacency).poem(input);
    assert_eq!(pet, adj, "backends disagree on {:?}", input);
    pet
}

#[test]
fn mugar_corpus_bridges_test_and_the() {
    assert_eq!(poem_both(EMBEDDED_TEXT, "Test the system."), "Test of the system.");
}

#[test]
fn bridge_in_the_middle_of_a_phrase() {
    assert_eq!(
        poem_both("or maybe not", "To be or not to be."),
        "To be or maybe not to be."
    );
}

#[test]
fn no_bridge_leaves_phrase_intact() {
    let input = "There is no bridge.";
    assert_eq!(poem_both("completely unrelated words here", input), input);
}

#[test]
fn empty_corpus_changes_nothing() {
    assert_eq!(poem_both("", "Nothing to add."), "Nothing to add.");
}

#[test]
fn zero_and_one_word_phrases_are_returned_unchanged() {
    assert_eq!(poem_both(EMBEDDED_TEXT, ""), "");
    assert_eq!(poem_both(EMBEDDED_TEXT, "Oscilloscope."), "Oscilloscope.");
}

#[test]
fn corpus_case_does_not_matter() {
    assert_eq!(
        poem_both("IT IS A GREAT TEST", "It is a Test."),
        "It is a Test."
    );
    assert_eq!(
        poem_both("It is a GREAT Test.", "It is a Test."),
        "It is a great Test."
    );
}

#[test]
fn special_characters_are_part_of_words() {
    assert_eq!(
        poem_both("hello, beautiful world!", "Hello, world!"),
        "Hello, beautiful world!"
    );
}

#[test]
fn trailing_punctuation_makes_distinct_words() {
    // "beautiful" in the corpus is not "beautiful." in the phrase.
    assert_eq!(
        poem_both("life is very beautiful", "Life is beautiful."),
        "Life is beautiful."
    );
}

#[test]
fn repeated_words_accumulate_toward_the_bridge() {
    assert_eq!(
        poem_both("is eternal love. love is eternal love.", "Love is love."),
        "Love is eternal love."
    );
}

#[test]
fn heavier_bridge_wins() {
    let corpus = "quick slow fox quick brown fox quick brown fox";
    assert_eq!(poem_both(corpus, "quick fox"), "quick brown fox");
}

#[test]
fn equal_bridges_resolve_to_smallest_label() {
    let corpus = "a zed b a alpha b";
    assert_eq!(poem_both(corpus, "A B"), "A alpha B");
}

#[test]
fn file_corpus_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mugar.txt");
    std::fs::write(
        &path,
        "This is a test of the Mugar Omni Theater space\nfor a live demonstration of the Oscilloscope.\n",
    )
    .unwrap();

    let corpus = Corpus::from_file(&path).unwrap();
    let (poet, report) = GraphPoet::from_corpus_with_report(&corpus, BackendKind::default()).unwrap();

    assert_eq!(report.tokens, 17);
    assert_eq!(report.pairs, 16);
    assert_eq!(poet.poem("Test the system."), "Test of the system.");
}

#[test]
fn concurrent_readers_share_one_graph() {
    let poet = poet_for(EMBEDDED_TEXT, BackendKind::PetGraph);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    assert_eq!(poet.poem("Test the system."), "Test of the system.");
                }
            });
        }
    });
}

#[test]
fn composed_poem_serializes_token_kinds() {
    let poet = poet_for(EMBEDDED_TEXT, BackendKind::PetGraph);
    let poem = poet.compose("Test the system.");
    let json = serde_json::to_value(&poem).unwrap();

    let kinds: Vec<_> = json["tokens"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["word", "bridge", "word", "word"]);
    assert_eq!(json["tokens"][1]["text"], "of");
    assert_eq!(json["tokens"][1]["weight"], 3);
}
