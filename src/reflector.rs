//! Reflector: fixed involutive wiring at the end of the rotor stack.
//!
//! The reflector sends the signal back through the rotors. Its wiring is
//! its own inverse and maps no letter onto itself, which makes the whole
//! machine self-reciprocal and guarantees a letter never encrypts to itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::letter::Letter;
use crate::utils::wiring::{self, Wiring};

/// Capability of a stateless reflector.
pub trait Reflector {
    /// Reflects a letter back toward the rotor stack.
    fn reflect(&self, input: Letter) -> Letter;
}

/// Historical wide-reflector presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReflectorType {
    A,
    #[default]
    B,
    C,
}

impl ReflectorType {
    /// Every preset.
    pub const ALL: [ReflectorType; 3] = [ReflectorType::A, ReflectorType::B, ReflectorType::C];

    /// Wiring string: entry `i` is the letter that `A + i` reflects to.
    pub fn wiring(self) -> &'static str {
        REFLECTOR_WIRINGS[self as usize]
    }

    fn table(self) -> Wiring {
        REFLECTOR_TABLES[self as usize]
    }
}

/// Reflector wirings, in [`ReflectorType::ALL`] order.
const REFLECTOR_WIRINGS: [&str; 3] = [
    "EJMZALYXVBWFCRQUONTSPIKHGD",
    "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    "FVPJIAOYEDRZXWGCTKUQSBNMHL",
];

const REFLECTOR_TABLES: [Wiring; 3] = [
    wiring::preset(REFLECTOR_WIRINGS[0]),
    wiring::preset(REFLECTOR_WIRINGS[1]),
    wiring::preset(REFLECTOR_WIRINGS[2]),
];

impl fmt::Display for ReflectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectorType::A => "A",
            ReflectorType::B => "B",
            ReflectorType::C => "C",
        };
        f.write_str(name)
    }
}

impl FromStr for ReflectorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReflectorType::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownReflector(s.to_string()))
    }
}

impl TryFrom<String> for ReflectorType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReflectorType> for String {
    fn from(value: ReflectorType) -> Self {
        value.to_string()
    }
}

/// Reflector backed by a validated wiring table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiredReflector {
    wiring: Wiring,
}

impl WiredReflector {
    /// Creates a reflector from a custom wiring string.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] unless the wiring is a permutation of
    /// A-Z that is its own inverse and has no fixed point.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::WiredReflector;
    ///
    /// assert!(WiredReflector::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").is_ok());
    /// // Identity wiring reflects every letter onto itself.
    /// assert!(WiredReflector::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, ValidationError> {
        let table = wiring::parse_permutation(wiring)?;
        for (i, &mapped) in table.iter().enumerate() {
            let letter = Letter::wrapping(i as i32).as_char();
            if usize::from(mapped) == i {
                return Err(ValidationError::ReflectorFixedPoint(letter));
            }
            if usize::from(table[usize::from(mapped)]) != i {
                return Err(ValidationError::ReflectorNotInvolution(letter));
            }
        }
        Ok(WiredReflector { wiring: table })
    }

    /// Creates a reflector from a historical preset.
    pub fn preset(reflector_type: ReflectorType) -> Self {
        WiredReflector {
            wiring: reflector_type.table(),
        }
    }

    /// Reflects a raw character.
    ///
    /// # Errors
    /// Returns [`ValidationError::NotALetter`] for anything outside `'A'..='Z'`.
    pub fn reflect_char(&self, input: char) -> Result<char, ValidationError> {
        if !input.is_ascii_uppercase() {
            return Err(ValidationError::NotALetter(input));
        }
        let letter = Letter::new(input)?;
        Ok(self.reflect(letter).as_char())
    }
}

impl Default for WiredReflector {
    fn default() -> Self {
        WiredReflector::preset(ReflectorType::B)
    }
}

impl Reflector for WiredReflector {
    fn reflect(&self, input: Letter) -> Letter {
        Letter::wrapping(i32::from(self.wiring[usize::from(input.index())]))
    }
}
