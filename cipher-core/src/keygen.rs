// File:    keygen.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Provides functionality for generating random Vigenère keywords from the OS random source.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use rand::{TryRngCore, rngs::OsRng};

/// Generates a random lowercase keyword with the specified number of letters.
///
/// # Arguments
///
/// * `length` - The number of letters in the keyword.
///
/// # Returns
///
/// A `std::io::Result<String>` holding exactly `length` lowercase ASCII
/// letters, suitable for direct use as a Vigenère keyword.
///
/// # Errors
///
/// This function will return an error if the OS random source fails.
pub fn random_keyword(length: usize) -> std::io::Result<String> {
    let mut rng = OsRng;
    let mut bytes = vec![0u8; length];
    // Use the failable `try_fill_bytes` and map the error to an `io::Error`.
    rng.try_fill_bytes(&mut bytes)
        .map_err(std::io::Error::other)?;

    Ok(bytes
        .into_iter()
        .map(|byte| char::from(b'a' + byte % 26))
        .collect())
}
