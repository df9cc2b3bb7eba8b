//! Rotor: one wired wheel of the machine.
//!
//! A rotor substitutes letters through a fixed wiring permutation, shifted
//! by the difference between its current position and its ring setting.
//! The signal crosses every rotor twice: once [`forward`](Rotor::forward)
//! on the way to the reflector and once [`backward`](Rotor::backward) on
//! the way back, through the inverse permutation built at construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::letter::Letter;
use crate::position::RotorPosition;
use crate::utils::wiring::{self, Wiring};

/// Capability of a single rotor wheel.
///
/// Implementations must keep `backward(forward(x)) == x` for every letter
/// at any fixed position.
pub trait Rotor {
    /// Substitutes a letter on the path toward the reflector.
    fn forward(&self, input: Letter) -> Letter;

    /// Substitutes a letter on the path back from the reflector.
    fn backward(&self, input: Letter) -> Letter;

    /// Advances the rotor one position.
    fn rotate(&mut self);

    /// True iff the current position equals the turnover notch.
    fn is_at_notch(&self) -> bool;

    /// Current position as shown in the rotor window.
    fn position(&self) -> RotorPosition;
}

/// Historical Enigma I rotor presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RotorType {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorType {
    /// Every preset, in numeric order.
    pub const ALL: [RotorType; 5] = [
        RotorType::I,
        RotorType::II,
        RotorType::III,
        RotorType::IV,
        RotorType::V,
    ];

    /// Wiring string: entry `i` is the letter that `A + i` connects to.
    pub fn wiring(self) -> &'static str {
        ROTOR_WIRINGS[self as usize]
    }

    /// Turnover notch letter.
    pub fn notch(self) -> char {
        match self {
            RotorType::I => 'Q',
            RotorType::II => 'E',
            RotorType::III => 'V',
            RotorType::IV => 'J',
            RotorType::V => 'Z',
        }
    }

    fn table(self) -> Wiring {
        ROTOR_TABLES[self as usize]
    }
}

/// Rotor wirings, in [`RotorType::ALL`] order.
const ROTOR_WIRINGS: [&str; 5] = [
    "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    "AJDKSIRUXBLHWTMCQGZNPYFVOE",
    "BDFHJLCPRTXVZNYEIWGAKMUSQO",
    "ESOVPZJAYQUIRHXLNFTGKDCMWB",
    "VZBRGITYUPSDNHLXAWMJQOFECK",
];

const ROTOR_TABLES: [Wiring; 5] = [
    wiring::preset(ROTOR_WIRINGS[0]),
    wiring::preset(ROTOR_WIRINGS[1]),
    wiring::preset(ROTOR_WIRINGS[2]),
    wiring::preset(ROTOR_WIRINGS[3]),
    wiring::preset(ROTOR_WIRINGS[4]),
];

impl fmt::Display for RotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorType::I => "I",
            RotorType::II => "II",
            RotorType::III => "III",
            RotorType::IV => "IV",
            RotorType::V => "V",
        };
        f.write_str(name)
    }
}

impl FromStr for RotorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorType::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownRotorType(s.to_string()))
    }
}

impl TryFrom<String> for RotorType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RotorType> for String {
    fn from(value: RotorType) -> Self {
        value.to_string()
    }
}

/// Rotor built from a wiring permutation, notch, ring setting and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiredRotor {
    forward: Wiring,
    inverse: Wiring,
    notch: Letter,
    ring_setting: Letter,
    position: RotorPosition,
}

impl WiredRotor {
    /// Creates a rotor from a custom wiring string.
    ///
    /// # Parameters
    /// - `wiring`: 26 letters, each appearing once.
    /// - `notch`: Position at which the next keypress carries to the left.
    /// - `ring_setting`: Ringstellung, the wiring's offset against the window.
    /// - `initial_position`: Letter shown in the window before the first key.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the wiring is not a permutation of
    /// A-Z or any setting character is outside A-Z.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Rotor, WiredRotor};
    ///
    /// let rotor = WiredRotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q', 'A', 'Q').unwrap();
    /// assert!(rotor.is_at_notch());
    ///
    /// assert!(WiredRotor::new("ABC", 'Q', 'A', 'A').is_err());
    /// ```
    pub fn new(
        wiring: &str,
        notch: char,
        ring_setting: char,
        initial_position: char,
    ) -> Result<Self, ValidationError> {
        let forward = wiring::parse_permutation(wiring)?;
        Self::build(forward, notch, ring_setting, initial_position)
    }

    /// Creates a rotor from a historical preset.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidSetting`] if `ring_setting` or
    /// `initial_position` is outside A-Z.
    pub fn from_type(
        rotor_type: RotorType,
        ring_setting: char,
        initial_position: char,
    ) -> Result<Self, ValidationError> {
        Self::build(
            rotor_type.table(),
            rotor_type.notch(),
            ring_setting,
            initial_position,
        )
    }

    fn build(
        forward: Wiring,
        notch: char,
        ring_setting: char,
        initial_position: char,
    ) -> Result<Self, ValidationError> {
        Ok(WiredRotor {
            inverse: wiring::invert(&forward),
            forward,
            notch: setting("notch", notch)?,
            ring_setting: setting("ring setting", ring_setting)?,
            position: RotorPosition::from_letter(setting("position", initial_position)?),
        })
    }

    /// Turnover notch letter.
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Ring setting letter.
    pub fn ring_setting(&self) -> Letter {
        self.ring_setting
    }

    /// Offset of the wiring core against the contacts.
    fn offset(&self) -> i32 {
        i32::from(self.position.index()) - i32::from(self.ring_setting.index())
    }

    fn substitute(&self, table: &Wiring, input: Letter) -> Letter {
        let offset = self.offset();
        let stepped = Letter::wrapping(i32::from(input.index()) + offset);
        let mapped = table[usize::from(stepped.index())];
        Letter::wrapping(i32::from(mapped) - offset)
    }
}

impl Rotor for WiredRotor {
    fn forward(&self, input: Letter) -> Letter {
        self.substitute(&self.forward, input)
    }

    fn backward(&self, input: Letter) -> Letter {
        self.substitute(&self.inverse, input)
    }

    fn rotate(&mut self) {
        self.position.advance();
    }

    fn is_at_notch(&self) -> bool {
        self.position.index() == self.notch.index()
    }

    fn position(&self) -> RotorPosition {
        self.position
    }
}

/// Validates a single setting character.
pub(crate) fn setting(name: &'static str, value: char) -> Result<Letter, ValidationError> {
    Letter::new(value).map_err(|_| ValidationError::InvalidSetting { name, value })
}
