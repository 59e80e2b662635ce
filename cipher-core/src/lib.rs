// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for cipher-core, providing the Caesar and Vigenère cipher transformations.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Core Library
//!
//! This library provides the core functionality for classical substitution
//! ciphers: the single-offset Caesar cipher, the keyword-driven Vigenère
//! cipher built on top of it, and random keyword generation.
//!
//! Both ciphers operate on the 26-letter Latin alphabet, preserve the case of
//! every letter, and pass non-alphabetic characters through unchanged. The
//! transforms take `&self` and keep no mutable state, so cipher values can be
//! shared freely across threads.

/// The Caesar cipher and the transform direction.
pub mod caesar;
/// Error types for cipher construction.
pub mod error;
/// Utilities for generating random Vigenère keywords.
pub mod keygen;
/// The keyword-driven Vigenère cipher.
pub mod vigenere;
