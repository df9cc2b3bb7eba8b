//! Letter: validated single alphabetic unit.
//!
//! A [`Letter`] is the only value the cipher core ever substitutes. It is
//! stored as its 0..26 alphabet index and always viewed in upper case, so
//! `Letter::new('a') == Letter::new('A')`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of letters in the machine alphabet.
pub const ALPHABET_LEN: usize = 26;

/// One letter A-Z, case-normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Creates a letter from an ASCII alphabetic character.
    ///
    /// # Errors
    /// Returns [`ValidationError::NotALetter`] for anything outside
    /// `a-z`/`A-Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Letter;
    ///
    /// let q = Letter::new('q').unwrap();
    /// assert_eq!(q.as_char(), 'Q');
    /// assert_eq!(q.index(), 16);
    /// assert!(Letter::new('?').is_err());
    /// ```
    pub fn new(character: char) -> Result<Self, ValidationError> {
        if !character.is_ascii_alphabetic() {
            return Err(ValidationError::NotALetter(character));
        }
        Ok(Letter(character.to_ascii_uppercase() as u8 - b'A'))
    }

    /// Creates a letter from its alphabet index (`0 => A`, `25 => Z`).
    ///
    /// # Errors
    /// Returns [`ValidationError::IndexOutOfRange`] if `index >= 26`.
    pub fn from_index(index: u8) -> Result<Self, ValidationError> {
        if usize::from(index) >= ALPHABET_LEN {
            return Err(ValidationError::IndexOutOfRange(index));
        }
        Ok(Letter(index))
    }

    /// Letter at `value` modulo 26, wrapping negatives the Euclidean way.
    pub(crate) fn wrapping(value: i32) -> Self {
        Letter(value.rem_euclid(ALPHABET_LEN as i32) as u8)
    }

    /// Alphabet index in 0..26.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Upper-case character view.
    pub fn as_char(self) -> char {
        char::from(b'A' + self.0)
    }

    /// Iterates the alphabet from `A` to `Z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = ValidationError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Letter::new(value)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
