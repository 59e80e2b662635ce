// File:    vigenere.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Implements the keyword-driven polyalphabetic Vigenère cipher on top of the Caesar primitive.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the keyword-driven Vigenère cipher.

use crate::caesar::{Caesar, Direction};
use crate::error::CipherError;

/// A polyalphabetic cipher that cycles through a keyword, applying the
/// Caesar shift of each keyword letter in turn.
///
/// Non-alphabetic input characters are passed through unchanged and do not
/// consume a keyword position, so `"attack at dawn"` and `"attackatdawn"`
/// see the same sequence of shifts on their letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    keys: Vec<Caesar>,
}

impl Vigenere {
    /// Creates a cipher from a keyword, building one Caesar instance per
    /// keyword letter.
    ///
    /// The keyword is case-insensitive: `"KeY"` and `"key"` build the same
    /// cipher.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyKeyword`] if `keyword` has no characters,
    /// and [`CipherError::InvalidOffsetCharacter`] if any keyword character
    /// is not an ASCII letter.
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        if keyword.is_empty() {
            return Err(CipherError::EmptyKeyword);
        }
        let keys = keyword
            .chars()
            .map(Caesar::from_letter)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { keys })
    }

    /// Encodes `text` with the keyword's sequence of shifts.
    #[must_use]
    pub fn encode(&self, text: &str) -> String {
        self.transform(text, Direction::Encode)
    }

    /// Decodes `text`, inverting [`Vigenere::encode`] under the same keyword.
    #[must_use]
    pub fn decode(&self, text: &str) -> String {
        self.transform(text, Direction::Decode)
    }

    /// Transforms `text` in the given direction.
    ///
    /// Walks the text with a cursor into the keyword, delegating each
    /// character to the Caesar instance at the cursor. The cursor starts at
    /// the first keyword letter, advances only after an ASCII letter has
    /// been processed, and wraps around so keywords shorter than the text
    /// are reused cyclically.
    #[must_use]
    pub fn transform(&self, text: &str, direction: Direction) -> String {
        let mut cursor = 0;
        let mut result = String::with_capacity(text.len());
        for letter in text.chars() {
            result.push(self.keys[cursor].shift(letter, direction));
            // Only letters consume a keyword position.
            if letter.is_ascii_alphabetic() {
                cursor = (cursor + 1) % self.keys.len();
            }
        }
        result
    }
}
