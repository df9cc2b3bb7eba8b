//! Error types for the Enigma library.
//!
//! Errors fall into three families:
//!
//! - [`ValidationError`]: malformed input to a constructor or value type
//!   (a non-letter, a broken wiring string, a wrong rotor count).
//! - [`OperationError`]: a runtime rule violated on otherwise valid values
//!   (a plugboard letter already in use, a machine without rotors).
//! - [`EnigmaError::StrictMode`]: a non-letter met by strict text processing.
//!
//! All of them surface synchronously at the point of violation and leave
//! machine state untouched.

use thiserror::Error;

use crate::letter::Letter;

/// Malformed input to a constructor or value type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Character is not an ASCII letter.
    #[error("'{0}' is not a letter A-Z")]
    NotALetter(char),
    /// Numeric letter index is outside 0..26.
    #[error("letter index {0} is outside 0..26")]
    IndexOutOfRange(u8),
    /// Wiring string does not contain exactly 26 characters.
    #[error("wiring must be 26 characters long, got {actual}")]
    WiringLength {
        /// Number of characters supplied.
        actual: usize,
    },
    /// Wiring string maps two inputs onto the same letter.
    #[error("wiring is not a permutation: '{0}' appears more than once")]
    WiringDuplicate(char),
    /// Reflector wiring maps a letter onto itself.
    #[error("reflector wiring maps '{0}' onto itself")]
    ReflectorFixedPoint(char),
    /// Reflector wiring is not its own inverse.
    #[error("reflector wiring is not symmetric at '{0}'")]
    ReflectorNotInvolution(char),
    /// A notch, ring-setting or position character is outside A-Z.
    #[error("{name} '{value}' is outside A-Z")]
    InvalidSetting {
        /// Which setting was rejected.
        name: &'static str,
        /// The offending character.
        value: char,
    },
    /// Wrong number of rotors for the machine variant.
    #[error("machine requires exactly {expected} rotors, got {actual}")]
    RotorCount {
        /// Rotor count required by the variant.
        expected: usize,
        /// Rotor count supplied.
        actual: usize,
    },
    /// A per-rotor settings string has the wrong length.
    #[error("{name} must have {expected} letters, got {actual}")]
    SettingsLength {
        /// Which settings string was rejected.
        name: &'static str,
        /// Length required.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
    /// Plugboard pair joins a letter to itself.
    #[error("cannot connect '{0}' to itself")]
    IdenticalPair(char),
    /// Plugboard pair text is not exactly two characters.
    #[error("plugboard pair must be two letters, got {0:?}")]
    PairLength(String),
    /// Rotor name is not one of the historical presets.
    #[error("unknown rotor type {0:?}")]
    UnknownRotorType(String),
    /// Reflector name is not one of the historical presets.
    #[error("unknown reflector {0:?}")]
    UnknownReflector(String),
    /// Text-transformer token is empty or contains non-letters.
    #[error("token {0:?} must be non-empty letters A-Z")]
    InvalidToken(String),
}

/// A runtime rule violated on otherwise valid values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The plugboard letter already belongs to another pair.
    #[error("letter '{0}' is already connected")]
    LetterInUse(Letter),
    /// The plugboard already holds its maximum number of pairs.
    #[error("plugboard is full: at most {max} pairs")]
    PlugboardFull {
        /// Pair capacity of the plugboard.
        max: usize,
    },
    /// A machine needs at least one rotor.
    #[error("machine requires at least one rotor")]
    NoRotors,
    /// A rotor slot was left empty.
    #[error("rotor slot {slot} is empty")]
    MissingRotor {
        /// Left-to-right index of the empty slot.
        slot: usize,
    },
}

/// Errors produced by the Enigma library.
#[derive(Debug, Error)]
pub enum EnigmaError {
    /// Malformed input.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Rule violation on valid input.
    #[error(transparent)]
    Operation(#[from] OperationError),
    /// Strict text processing met a non-letter.
    #[error("non-letter {character:?} at position {position} rejected in strict mode")]
    StrictMode {
        /// The rejected character.
        character: char,
        /// Character (not byte) offset into the input.
        position: usize,
    },
    /// Machine configuration could not be parsed or serialized.
    #[error("invalid machine configuration: {0}")]
    Config(#[from] serde_json::Error),
}
