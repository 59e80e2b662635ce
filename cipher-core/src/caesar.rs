// File:    caesar.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Implements the single-offset Caesar substitution cipher, the foundational transform of this library.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the Caesar cipher, the foundational substitution
//! primitive the Vigenère cipher is built on.

use crate::error::CipherError;

/// Number of letters in the alphabet; the modulus for all offset arithmetic.
const ALPHABET_LEN: u8 = 26;

/// Which way a transform shifts letters through the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Shift letters forward by the cipher offset.
    Encode,
    /// Shift letters backward, inverting [`Direction::Encode`].
    Decode,
}

/// A single-offset substitution cipher over the 26-letter Latin alphabet.
///
/// The offset is normalized into `[0, 26)` at construction and immutable
/// afterwards; shifting by a different amount means constructing a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    offset: u8,
}

impl Caesar {
    /// Creates a cipher from an integer offset.
    ///
    /// Any integer is accepted; the offset is reduced with mathematical
    /// modulo, so negative values and values of 26 or more wrap into
    /// `[0, 26)`.
    #[must_use]
    pub fn from_offset(offset: i32) -> Self {
        // rem_euclid, unlike %, keeps negative offsets in [0, 26).
        let offset = offset.rem_euclid(i32::from(ALPHABET_LEN)) as u8;
        Self { offset }
    }

    /// Creates a cipher whose offset is the zero-based alphabet position of
    /// `letter`, ignoring case: `'a'` and `'A'` give 0, `'d'` gives 3.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidOffsetCharacter`] if `letter` is not an
    /// ASCII letter.
    pub fn from_letter(letter: char) -> Result<Self, CipherError> {
        alphabet_index(letter)
            .map(|offset| Self { offset })
            .ok_or(CipherError::InvalidOffsetCharacter(letter))
    }

    /// Encodes `text`, shifting each letter forward by the offset.
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        self.transform(text, Direction::Encode)
    }

    /// Decodes `text`, shifting each letter backward by the offset.
    #[must_use]
    pub fn decode(&self, text: &str) -> String {
        self.transform(text, Direction::Decode)
    }

    /// Transforms `text` in the given direction.
    ///
    /// Letters are substituted within the alphabet with their case preserved;
    /// every other character (digits, punctuation, whitespace, non-ASCII) is
    /// copied through unchanged. The output always has the same length and
    /// character order as the input.
    #[must_use]
    pub fn transform(&self, text: &str, direction: Direction) -> String {
        // Only single-byte ASCII letters are rewritten, so the output never
        // grows past the input's byte length.
        let mut result = String::with_capacity(text.len());
        for letter in text.chars() {
            result.push(self.shift(letter, direction));
        }
        result
    }

    /// Shifts a single character, leaving non-letters untouched.
    pub(crate) fn shift(self, letter: char, direction: Direction) -> char {
        // Decoding shifts the other way around the alphabet.
        let effective = match direction {
            Direction::Encode => self.offset,
            Direction::Decode => (ALPHABET_LEN - self.offset) % ALPHABET_LEN,
        };
        match alphabet_index(letter) {
            Some(index) => {
                let substituted = char::from(b'a' + (index + effective) % ALPHABET_LEN);
                if letter.is_ascii_uppercase() {
                    substituted.to_ascii_uppercase()
                } else {
                    substituted
                }
            }
            None => letter,
        }
    }
}

/// Zero-based alphabet position of an ASCII letter, ignoring case.
fn alphabet_index(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_lowercase() as u8 - b'a')
    } else {
        None
    }
}
