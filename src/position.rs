//! RotorPosition: wrap-around rotor offset.

use std::fmt;

use serde::Serialize;

use crate::letter::{Letter, ALPHABET_LEN};

/// Angular offset of a rotor, always normalized into 0..26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RotorPosition(u8);

impl RotorPosition {
    /// Creates a position from any integer, wrapping modulo 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::RotorPosition;
    ///
    /// assert_eq!(RotorPosition::new(27).index(), 1);
    /// assert_eq!(RotorPosition::new(-1).index(), 25);
    /// ```
    pub fn new(index: i32) -> Self {
        RotorPosition(index.rem_euclid(ALPHABET_LEN as i32) as u8)
    }

    /// Position shown as `letter` in the rotor window.
    pub fn from_letter(letter: Letter) -> Self {
        RotorPosition(letter.index())
    }

    /// Index in 0..26.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Letter shown in the rotor window.
    pub fn letter(self) -> Letter {
        Letter::wrapping(i32::from(self.0))
    }

    /// Advances one step, wrapping `Z` back to `A`.
    pub fn advance(&mut self) {
        *self = RotorPosition::new(i32::from(self.0) + 1);
    }
}

impl From<Letter> for RotorPosition {
    fn from(letter: Letter) -> Self {
        RotorPosition::from_letter(letter)
    }
}

impl fmt::Display for RotorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
