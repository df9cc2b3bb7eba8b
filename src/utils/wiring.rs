//! Wiring table utilities.
//!
//! A wiring is a 26-entry table where entry `i` holds the alphabet index
//! that input letter `i` is connected to. Rotors and reflectors both parse
//! their wiring strings here.

use crate::error::ValidationError;
use crate::letter::{Letter, ALPHABET_LEN};

/// 26-entry substitution table over alphabet indices.
pub(crate) type Wiring = [u8; ALPHABET_LEN];

/// Builds a wiring table from a compile-time preset string.
///
/// Presets are trusted constants of 26 upper-case letters; anything else
/// fails const evaluation.
pub(crate) const fn preset(wiring: &str) -> Wiring {
    let bytes = wiring.as_bytes();
    assert!(bytes.len() == ALPHABET_LEN);
    let mut table = [0u8; ALPHABET_LEN];
    let mut i = 0;
    while i < ALPHABET_LEN {
        assert!(bytes[i].is_ascii_uppercase());
        table[i] = bytes[i] - b'A';
        i += 1;
    }
    table
}

/// Parses a 26-letter wiring string into a bijective table.
///
/// Letters are case-insensitive.
///
/// # Errors
/// - [`ValidationError::WiringLength`] if the string is not 26 characters.
/// - [`ValidationError::NotALetter`] for any character outside A-Z.
/// - [`ValidationError::WiringDuplicate`] if a letter appears twice.
pub(crate) fn parse_permutation(wiring: &str) -> Result<Wiring, ValidationError> {
    let actual = wiring.chars().count();
    if actual != ALPHABET_LEN {
        return Err(ValidationError::WiringLength { actual });
    }

    let mut table = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (slot, ch) in table.iter_mut().zip(wiring.chars()) {
        let letter = Letter::new(ch)?;
        let target = usize::from(letter.index());
        if seen[target] {
            return Err(ValidationError::WiringDuplicate(letter.as_char()));
        }
        seen[target] = true;
        *slot = letter.index();
    }
    Ok(table)
}

/// Inverts a bijective table: `inverse[table[i]] == i`.
pub(crate) fn invert(table: &Wiring) -> Wiring {
    let mut inverse = [0u8; ALPHABET_LEN];
    for (i, &mapped) in table.iter().enumerate() {
        inverse[usize::from(mapped)] = i as u8;
    }
    inverse
}
