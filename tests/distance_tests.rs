use proptest::prelude::*;
use word_ladder::{hamming_distance, is_one_apart, LadderError};

#[test]
fn test_identical_words() {
    assert_eq!(hamming_distance("CAT", "CAT").unwrap(), 0);
}

#[test]
fn test_single_difference() {
    assert_eq!(hamming_distance("CAT", "COT").unwrap(), 1);
    assert_eq!(hamming_distance("CAT", "CAB").unwrap(), 1);
    assert_eq!(hamming_distance("CAT", "BAT").unwrap(), 1);
}

#[test]
fn test_all_positions_differ() {
    assert_eq!(hamming_distance("CAT", "DOG").unwrap(), 3);
}

#[test]
fn test_empty_words() {
    assert_eq!(hamming_distance("", "").unwrap(), 0);
    assert!(!is_one_apart("", ""));
}

#[test]
fn test_length_mismatch_is_an_error() {
    let err = hamming_distance("CAT", "CATS").unwrap_err();
    match err {
        LadderError::LengthMismatch { left, right } => {
            assert_eq!(left, "CAT");
            assert_eq!(right, "CATS");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(hamming_distance("CATS", "CAT").is_err());
}

#[test]
fn test_non_ascii_counts_chars() {
    assert_eq!(hamming_distance("ÄPFEL", "APFEL").unwrap(), 1);
    assert!(is_one_apart("ÄPFEL", "APFEL"));
}

#[test]
fn test_is_one_apart() {
    assert!(is_one_apart("COG", "DOG"));
    assert!(!is_one_apart("COG", "COG"));
    assert!(!is_one_apart("CAT", "DOG"));
    assert!(!is_one_apart("CAT", "CATS"));
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in "[A-D]{4}", b in "[A-D]{4}") {
        prop_assert_eq!(hamming_distance(&a, &b).unwrap(), hamming_distance(&b, &a).unwrap());
    }

    #[test]
    fn distance_to_self_is_zero(a in "[A-Z]{0,8}") {
        prop_assert_eq!(hamming_distance(&a, &a).unwrap(), 0);
    }

    #[test]
    fn one_apart_agrees_with_distance(a in "[A-C]{3}", b in "[A-C]{3}") {
        prop_assert_eq!(is_one_apart(&a, &b), hamming_distance(&a, &b).unwrap() == 1);
    }
}
