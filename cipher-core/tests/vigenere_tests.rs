#![allow(missing_docs)]
use cipher_core::caesar::{Caesar, Direction};
use cipher_core::error::CipherError;
use cipher_core::keygen;
use cipher_core::vigenere::Vigenere;

#[test]
fn test_classic_vector_encodes_deterministically() {
    let cipher = Vigenere::new("key").unwrap();
    assert_eq!(cipher.encode("attackatdawn"), "kxrkgikxbkal");
}

#[test]
fn test_decode_inverts_encode() {
    let cipher = Vigenere::new("key").unwrap();
    assert_eq!(cipher.decode("kxrkgikxbkal"), "attackatdawn");
}

#[test]
fn test_spaced_text_keeps_case_and_spacing() {
    let cipher = Vigenere::new("lemon").unwrap();
    assert_eq!(cipher.encode("Attack At Dawn"), "Lxfopv Ef Rnhr");
}

#[test]
fn test_non_letters_do_not_consume_keyword_positions() {
    let cipher = Vigenere::new("key").unwrap();
    // The comma and space leave the cursor on 'e'; consuming them would give "k, k".
    assert_eq!(cipher.encode("a, a"), "k, e");
}

#[test]
fn test_keyword_wraps_around_short_keywords() {
    let cipher = Vigenere::new("ab").unwrap();
    assert_eq!(cipher.encode("aaaa"), "abab");
}

#[test]
fn test_roundtrip_with_punctuation_and_digits() {
    let cipher = Vigenere::new("fortification").unwrap();
    let plaintext = "Defend the east wall of the castle, at 6 o'clock sharp!";
    assert_eq!(cipher.decode(&cipher.encode(plaintext)), plaintext);
}

#[test]
fn test_keyword_is_case_insensitive() {
    let upper = Vigenere::new("KeY").unwrap();
    let lower = Vigenere::new("key").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(
        upper.encode("attack at dawn"),
        lower.encode("attack at dawn")
    );
}

#[test]
fn test_all_a_keyword_is_identity() {
    let cipher = Vigenere::new("aaa").unwrap();
    assert_eq!(cipher.encode("Hello, World!"), "Hello, World!");
}

#[test]
fn test_single_letter_keyword_matches_caesar() {
    let vigenere = Vigenere::new("d").unwrap();
    let caesar = Caesar::from_offset(3);
    let text = "Mixed CASE text, 123!";
    assert_eq!(vigenere.encode(text), caesar.encode(text));
    assert_eq!(vigenere.decode(text), caesar.decode(text));
}

#[test]
fn test_non_ascii_passes_through_unchanged() {
    let cipher = Vigenere::new("key").unwrap();
    assert_eq!(cipher.encode("héllo"), "répjy");
}

#[test]
fn test_empty_text_gives_empty_output() {
    let cipher = Vigenere::new("key").unwrap();
    assert_eq!(cipher.encode(""), "");
}

#[test]
fn test_empty_keyword_is_rejected() {
    assert_eq!(Vigenere::new(""), Err(CipherError::EmptyKeyword));
}

#[test]
fn test_non_letter_keyword_characters_are_rejected() {
    assert_eq!(
        Vigenere::new("k3y"),
        Err(CipherError::InvalidOffsetCharacter('3'))
    );
    assert_eq!(
        Vigenere::new("pass word"),
        Err(CipherError::InvalidOffsetCharacter(' '))
    );
}

#[test]
fn test_shared_cipher_transforms_across_threads() {
    let cipher = Vigenere::new("lemon").unwrap();
    let expected = cipher.encode("attackatdawn");
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(
                    cipher.transform("attackatdawn", Direction::Encode),
                    expected
                );
            });
        }
    });
}

#[test]
fn test_generated_keywords_are_valid() {
    let keyword = keygen::random_keyword(12).unwrap();
    assert_eq!(keyword.len(), 12);
    assert!(keyword.chars().all(|c| c.is_ascii_lowercase()));
    assert!(Vigenere::new(&keyword).is_ok());
}

#[test]
fn test_zero_length_keygen_gives_empty_keyword() {
    assert_eq!(keygen::random_keyword(0).unwrap(), "");
}
