//! Machine configuration.
//!
//! A [`MachineConfig`] is the complete daily key: rotor order, ring
//! settings, start positions, plugboard cables and reflector, plus how text
//! processing treats non-letters. It serializes to JSON so a key can be
//! shared between the sending and receiving side, and [`build`] turns it
//! into a fresh engine every time.
//!
//! All rotor-ordered fields are left-to-right.
//!
//! ```json
//! {
//!   "rotors": ["I", "III", "V"],
//!   "ring_settings": "BBB",
//!   "positions": "WWW",
//!   "plugboard": ["BA", "QU", "CG"],
//!   "reflector": "B",
//!   "non_letters": "pass_through"
//! }
//! ```
//!
//! [`build`]: MachineConfig::build

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::CipherEngine;
use crate::error::EnigmaError;
use crate::factory::MachineFactory;
use crate::plugboard::{PairPlugboard, PlugboardPair};
use crate::reflector::{ReflectorType, WiredReflector};
use crate::rotor::RotorType;

/// How text processing treats characters that are not letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonLetterPolicy {
    /// Copy non-letters through without stepping the rotors.
    #[default]
    PassThrough,
    /// Reject the whole input if it contains a non-letter.
    Reject,
}

/// Complete key for an Enigma I machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor types, left-to-right.
    pub rotors: Vec<RotorType>,
    /// Ring settings, left-to-right (e.g. `"BBB"`).
    pub ring_settings: String,
    /// Window letters before the first key, left-to-right (e.g. `"WWW"`).
    pub positions: String,
    /// Plugboard cables.
    #[serde(default)]
    pub plugboard: Vec<PlugboardPair>,
    /// Reflector preset.
    #[serde(default)]
    pub reflector: ReflectorType,
    /// Non-letter handling for text processing.
    #[serde(default)]
    pub non_letters: NonLetterPolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: vec![RotorType::I, RotorType::II, RotorType::III],
            ring_settings: "AAA".to_string(),
            positions: "AAA".to_string(),
            plugboard: Vec::new(),
            reflector: ReflectorType::B,
            non_letters: NonLetterPolicy::PassThrough,
        }
    }
}

impl MachineConfig {
    /// Creates a config with the given rotors and settings, no plugboard
    /// cables, reflector B and pass-through text handling.
    pub fn new(rotors: &[RotorType], ring_settings: &str, positions: &str) -> Self {
        MachineConfig {
            rotors: rotors.to_vec(),
            ring_settings: ring_settings.to_string(),
            positions: positions.to_string(),
            ..Default::default()
        }
    }

    /// Parses a JSON config.
    ///
    /// Plugboard pairs and rotor names are validated while parsing; the
    /// remaining settings are validated by [`build`](Self::build).
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] on malformed JSON or invalid values.
    pub fn from_json(json: &str) -> Result<Self, EnigmaError> {
        let config: MachineConfig = serde_json::from_str(json)?;
        debug!(
            rotors = ?config.rotors,
            reflector = %config.reflector,
            plugs = config.plugboard.len(),
            "parsed machine config"
        );
        Ok(config)
    }

    /// Serializes the config as JSON.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String, EnigmaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the plugboard cables.
    pub fn with_plugboard<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = PlugboardPair>,
    {
        self.plugboard = pairs.into_iter().collect();
        self
    }

    /// Sets the reflector preset.
    pub fn with_reflector(mut self, reflector: ReflectorType) -> Self {
        self.reflector = reflector;
        self
    }

    /// Sets how text processing treats non-letters.
    pub fn with_non_letters(mut self, policy: NonLetterPolicy) -> Self {
        self.non_letters = policy;
        self
    }

    /// Builds a fresh engine at the configured start positions.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Validation`] for malformed settings and
    /// [`EnigmaError::Operation`] for plugboard conflicts.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{LetterCipher, MachineConfig, NonLetterPolicy, RotorType};
    ///
    /// let config = MachineConfig::new(&[RotorType::I, RotorType::II, RotorType::III], "AAA", "AAA");
    /// let mut engine = config.build().unwrap();
    /// let text = engine.process_text("AAAAA", NonLetterPolicy::PassThrough).unwrap();
    /// assert_eq!(text, "BDZGO");
    /// ```
    pub fn build(&self) -> Result<CipherEngine, EnigmaError> {
        let plugboard = PairPlugboard::with_pairs(self.plugboard.iter().copied())?;
        MachineFactory::enigma_i(
            &self.rotors,
            &self.ring_settings,
            &self.positions,
            plugboard,
            WiredReflector::preset(self.reflector),
        )
    }
}
