use thiserror::Error;

/// Errors produced when constructing a cipher.
///
/// Transforms themselves are infallible; every failure happens at
/// construction time, where the caller decides whether to reject the key or
/// surface a user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// A character supplied as an offset, directly or through a Vigenère
    /// keyword, is not one of the 26 ASCII letters.
    #[error("invalid offset character '{0}': expected an ASCII letter")]
    InvalidOffsetCharacter(char),

    /// A Vigenère keyword contained no characters at all.
    #[error("keyword must contain at least one character")]
    EmptyKeyword,
}
