//! Row identifier generation.
//!
//! Bike assigns every row a short id attribute. When building outline
//! documents from scratch we have to mint our own: random, unique within the
//! document, and legal as an XML id (leading letter, then letters, digits,
//! `-` or `_`).

use crate::error::FormatError;
use rand::Rng;
use std::collections::HashSet;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generate a random row id of exactly `length` characters.
///
/// The first character is always a letter; the remaining characters are
/// drawn from letters, digits, `-` and `_`.
pub fn generate_id(length: usize) -> Result<String, FormatError> {
    if length < 1 {
        return Err(FormatError::InvalidIdLength(length));
    }

    let mut rng = rand::rng();
    let mut id = String::with_capacity(length);

    id.push(LETTERS[rng.random_range(0..LETTERS.len())] as char);
    for _ in 1..length {
        id.push(ID_CHARS[rng.random_range(0..ID_CHARS.len())] as char);
    }

    Ok(id)
}

/// Generate a row id that does not collide with `existing`.
///
/// Retries up to `max_tries` times and fails with
/// [`FormatError::IdSpaceExhausted`] if every attempt collided.
pub fn generate_unique_id(
    length: usize,
    existing: &HashSet<String>,
    max_tries: usize,
) -> Result<String, FormatError> {
    for _ in 0..max_tries {
        let id = generate_id(length)?;
        if !existing.contains(&id) {
            return Ok(id);
        }
    }
    Err(FormatError::IdSpaceExhausted { tries: max_tries })
}
