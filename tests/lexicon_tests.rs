use proptest::prelude::*;
use std::collections::BTreeSet;
use std::io::{BufReader, Cursor, Read, Write};
use word_ladder::{hamming_distance, normalize_word, LadderError, Lexicon, NeighborStrategy};

fn sample_lexicon() -> Lexicon {
    Lexicon::from_words(["CAT", "COT", "COG", "DOG", "COP", "CATS", "A"], 3)
}

#[test]
fn test_filters_by_length() {
    let lexicon = sample_lexicon();
    assert_eq!(lexicon.size(), 5);
    assert_eq!(lexicon.word_length(), 3);
    assert!(!lexicon.contains("CATS"));
    assert!(!lexicon.contains("A"));
}

#[test]
fn test_deduplicates_and_uppercases() {
    let lexicon = Lexicon::from_words(["cat", "CAT", "Cat", "dog"], 3);
    assert_eq!(lexicon.size(), 2);
    assert!(lexicon.contains("CAT"));
    assert!(lexicon.contains("DOG"));
    assert!(!lexicon.contains("cat"));
}

#[test]
fn test_iteration_is_sorted() {
    let lexicon = sample_lexicon();
    let words: Vec<&str> = lexicon.iter().collect();
    assert_eq!(words, vec!["CAT", "COG", "COP", "COT", "DOG"]);
}

#[test]
fn test_alphabet() {
    let lexicon = Lexicon::from_words(["cab", "bad"], 3);
    let alphabet: Vec<char> = lexicon.alphabet().iter().copied().collect();
    assert_eq!(alphabet, vec!['A', 'B', 'C', 'D']);
}

#[test]
fn test_from_reader_splits_on_any_whitespace() {
    let source = "cat cot\n\tcog  dog\r\n\ncop catalog\n";
    let lexicon = Lexicon::from_reader(Cursor::new(source), 3).unwrap();
    assert_eq!(lexicon.size(), 5);
    assert!(lexicon.contains("COP"));
}

#[test]
fn test_from_reader_skips_invalid_utf8_tokens() {
    let source: &[u8] = b"cat cot caf\xe9\ndog \xff\xfe\xfd cog\n";
    let lexicon = Lexicon::from_reader(source, 3).unwrap();
    let words: Vec<&str> = lexicon.iter().collect();
    assert_eq!(words, vec!["CAT", "COG", "COT", "DOG"]);
}

#[test]
fn test_load_skips_invalid_utf8_tokens() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"cold caf\xe9 cord\nword\n").unwrap();

    let lexicon = Lexicon::load(file.path(), 4).unwrap();
    assert_eq!(lexicon.size(), 3);
    assert!(lexicon.contains("CORD"));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk went away"))
    }
}

#[test]
fn test_from_reader_reports_read_failure() {
    let err = Lexicon::from_reader(BufReader::new(FailingReader), 3).unwrap_err();
    assert!(matches!(err, LadderError::Io(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "cold cord card ward word").unwrap();
    writeln!(file, "warm worm").unwrap();

    let lexicon = Lexicon::load(file.path(), 4).unwrap();
    assert_eq!(lexicon.size(), 7);
    assert!(lexicon.contains("WARM"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match Lexicon::load(&path, 3) {
        Err(LadderError::Dictionary { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a dictionary error, got {other:?}"),
    }
}

#[test]
fn test_neighbors() {
    let lexicon = sample_lexicon();
    let neighbors = lexicon.neighbors("COT");
    assert_eq!(neighbors, BTreeSet::from(["CAT", "COG", "COP"]));
    assert_eq!(lexicon.neighbors("DOG"), BTreeSet::from(["COG"]));
}

#[test]
fn test_neighbors_of_non_member_is_empty() {
    let lexicon = sample_lexicon();
    assert!(lexicon.neighbors("COW").is_empty());
    assert!(lexicon
        .neighbors_with("COW", NeighborStrategy::Substitution)
        .is_empty());
}

#[test]
fn test_neighbors_exclude_self() {
    let lexicon = sample_lexicon();
    for strategy in [NeighborStrategy::Scan, NeighborStrategy::Substitution] {
        assert!(!lexicon.neighbors_with("CAT", strategy).contains("CAT"));
    }
}

#[test]
fn test_strategies_agree_on_sample() {
    let lexicon = sample_lexicon();
    for word in lexicon.iter() {
        assert_eq!(
            lexicon.neighbors_with(word, NeighborStrategy::Scan),
            lexicon.neighbors_with(word, NeighborStrategy::Substitution),
            "strategies disagree for {word}"
        );
    }
}

#[test]
fn test_with_strategy() {
    let lexicon = sample_lexicon().with_strategy(NeighborStrategy::Substitution);
    assert_eq!(lexicon.strategy(), NeighborStrategy::Substitution);
    assert_eq!(lexicon.neighbors("COG"), BTreeSet::from(["COP", "COT", "DOG"]));
}

#[test]
fn test_normalize_word() {
    assert_eq!(normalize_word("cAt"), "CAT");
}

#[test]
fn test_lexicon_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Lexicon>();
}

proptest! {
    #[test]
    fn neighbors_are_exactly_distance_one(words in prop::collection::vec("[a-c]{3}", 1..30)) {
        let lexicon = Lexicon::from_words(&words, 3);
        for a in lexicon.iter() {
            let neighbors = lexicon.neighbors(a);
            for b in lexicon.iter() {
                let one_apart = hamming_distance(a, b).unwrap() == 1;
                prop_assert_eq!(one_apart, neighbors.contains(b));
            }
        }
    }

    #[test]
    fn strategies_return_identical_sets(words in prop::collection::vec("[a-d]{4}", 1..40)) {
        let lexicon = Lexicon::from_words(&words, 4);
        for word in lexicon.iter() {
            prop_assert_eq!(
                lexicon.neighbors_with(word, NeighborStrategy::Scan),
                lexicon.neighbors_with(word, NeighborStrategy::Substitution)
            );
        }
    }
}
