//! Plugboard: pairwise letter swaps before and after the rotor stack.
//!
//! Each [`PlugboardPair`] cross-wires two letters. A letter takes part in
//! at most one pair and the board holds at most [`MAX_PAIRS`] pairs, so
//! [`transform`](Plugboard::transform) is always an involution.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EnigmaError, OperationError, ValidationError};
use crate::letter::{Letter, ALPHABET_LEN};

/// Maximum number of cables on an Enigma I plugboard.
pub const MAX_PAIRS: usize = 10;

/// Capability of a plugboard swap table.
pub trait Plugboard {
    /// Cross-wires the two letters of `pair`.
    ///
    /// # Errors
    /// Returns [`OperationError::LetterInUse`] if either letter is already
    /// wired, or [`OperationError::PlugboardFull`] at capacity.
    fn connect(&mut self, pair: PlugboardPair) -> Result<(), OperationError>;

    /// Removes `pair` if it is wired exactly as given (in either order).
    ///
    /// Returns `true` when a cable was removed.
    fn disconnect(&mut self, pair: PlugboardPair) -> bool;

    /// Partner of `letter`, or `letter` itself when unplugged.
    fn transform(&self, letter: Letter) -> Letter;

    /// Current pairs in connection order.
    fn connections(&self) -> Vec<PlugboardPair>;
}

/// Two distinct letters joined by one cable.
///
/// Equality and hashing ignore order: `AB == BA`.
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlugboardPair {
    first: Letter,
    second: Letter,
}

impl PlugboardPair {
    /// Creates a pair from two characters.
    ///
    /// # Errors
    /// Returns [`ValidationError::NotALetter`] for a non-letter or
    /// [`ValidationError::IdenticalPair`] if both letters are the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::PlugboardPair;
    ///
    /// let pair = PlugboardPair::new('b', 'A').unwrap();
    /// assert_eq!(pair, PlugboardPair::new('A', 'B').unwrap());
    /// assert!(PlugboardPair::new('C', 'c').is_err());
    /// ```
    pub fn new(first: char, second: char) -> Result<Self, ValidationError> {
        Self::from_letters(Letter::new(first)?, Letter::new(second)?)
    }

    /// Creates a pair from two letters.
    ///
    /// # Errors
    /// Returns [`ValidationError::IdenticalPair`] if `first == second`.
    pub fn from_letters(first: Letter, second: Letter) -> Result<Self, ValidationError> {
        if first == second {
            return Err(ValidationError::IdenticalPair(first.as_char()));
        }
        Ok(PlugboardPair { first, second })
    }

    /// First letter as given.
    pub fn first(&self) -> Letter {
        self.first
    }

    /// Second letter as given.
    pub fn second(&self) -> Letter {
        self.second
    }

    /// True if `letter` is one end of this pair.
    pub fn contains(&self, letter: Letter) -> bool {
        self.first == letter || self.second == letter
    }

    /// The other end of the cable, if `letter` is on this pair.
    pub fn partner(&self, letter: Letter) -> Option<Letter> {
        if letter == self.first {
            Some(self.second)
        } else if letter == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    fn ordered(&self) -> (Letter, Letter) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

impl PartialEq for PlugboardPair {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Hash for PlugboardPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl fmt::Display for PlugboardPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl FromStr for PlugboardPair {
    type Err = ValidationError;

    /// Parses a two-letter pair such as `"qu"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => PlugboardPair::new(first, second),
            _ => Err(ValidationError::PairLength(s.to_string())),
        }
    }
}

impl TryFrom<String> for PlugboardPair {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlugboardPair> for String {
    fn from(pair: PlugboardPair) -> Self {
        pair.to_string()
    }
}

/// Plugboard holding up to [`MAX_PAIRS`] cables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairPlugboard {
    partners: [Option<Letter>; ALPHABET_LEN],
    pairs: Vec<PlugboardPair>,
}

impl PairPlugboard {
    /// Creates an empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plugboard and connects every pair in order.
    ///
    /// # Errors
    /// Fails on the first pair that [`connect`](Plugboard::connect) rejects.
    pub fn with_pairs<I>(pairs: I) -> Result<Self, OperationError>
    where
        I: IntoIterator<Item = PlugboardPair>,
    {
        let mut board = Self::new();
        for pair in pairs {
            board.connect(pair)?;
        }
        Ok(board)
    }

    /// Number of connected pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no cable is plugged in.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn partner(&self, letter: Letter) -> Option<Letter> {
        self.partners[usize::from(letter.index())]
    }
}

impl Plugboard for PairPlugboard {
    fn connect(&mut self, pair: PlugboardPair) -> Result<(), OperationError> {
        for letter in [pair.first(), pair.second()] {
            if self.partner(letter).is_some() {
                return Err(OperationError::LetterInUse(letter));
            }
        }
        if self.pairs.len() >= MAX_PAIRS {
            return Err(OperationError::PlugboardFull { max: MAX_PAIRS });
        }

        self.partners[usize::from(pair.first().index())] = Some(pair.second());
        self.partners[usize::from(pair.second().index())] = Some(pair.first());
        self.pairs.push(pair);
        Ok(())
    }

    fn disconnect(&mut self, pair: PlugboardPair) -> bool {
        if self.partner(pair.first()) != Some(pair.second()) {
            return false;
        }
        self.partners[usize::from(pair.first().index())] = None;
        self.partners[usize::from(pair.second().index())] = None;
        self.pairs.retain(|p| *p != pair);
        true
    }

    fn transform(&self, letter: Letter) -> Letter {
        self.partner(letter).unwrap_or(letter)
    }

    fn connections(&self) -> Vec<PlugboardPair> {
        self.pairs.clone()
    }
}

impl FromStr for PairPlugboard {
    type Err = EnigmaError;

    /// Parses a whitespace-separated pair list such as `"BA QU CG"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pairs = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<PlugboardPair>, ValidationError>>()?;
        Ok(PairPlugboard::with_pairs(pairs)?)
    }
}
