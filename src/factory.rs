//! MachineFactory: assembles historical Enigma I machines.

use tracing::debug;

use crate::engine::CipherEngine;
use crate::error::{EnigmaError, ValidationError};
use crate::plugboard::{PairPlugboard, Plugboard};
use crate::reflector::WiredReflector;
use crate::rotor::{RotorType, WiredRotor};

/// Builds three-rotor Enigma I machines from rotor presets.
///
/// All arguments are left-to-right: `rotors[0]`, `ring_settings[0]` and
/// `positions[0]` describe the slow (leftmost) rotor.
pub struct MachineFactory;

impl MachineFactory {
    /// Number of rotors in an Enigma I.
    pub const ROTOR_COUNT: usize = 3;

    /// Creates one preset rotor.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidSetting`] if a setting is outside A-Z.
    pub fn rotor(
        rotor_type: RotorType,
        ring_setting: char,
        position: char,
    ) -> Result<WiredRotor, ValidationError> {
        WiredRotor::from_type(rotor_type, ring_setting, position)
    }

    /// Creates an Enigma I machine.
    ///
    /// # Parameters
    /// - `rotors`: Exactly three rotor types, left-to-right.
    /// - `ring_settings`: Three letters, e.g. `"BBB"`.
    /// - `positions`: Three letters shown in the windows, e.g. `"WWW"`.
    /// - `plugboard`: Cabled plugboard.
    /// - `reflector`: Reflector wiring.
    ///
    /// # Errors
    /// Returns [`ValidationError::RotorCount`] or
    /// [`ValidationError::SettingsLength`] on a wrong count, and
    /// [`ValidationError::InvalidSetting`] for a setting outside A-Z.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{LetterCipher, MachineFactory, NonLetterPolicy, PairPlugboard, RotorType, WiredReflector};
    ///
    /// let plugboard = "BA QU CG XT DI ER JW LS VK NM".parse::<PairPlugboard>().unwrap();
    /// let mut machine = MachineFactory::enigma_i(
    ///     &[RotorType::I, RotorType::III, RotorType::V],
    ///     "BBB",
    ///     "WWW",
    ///     plugboard,
    ///     WiredReflector::default(),
    /// )
    /// .unwrap();
    ///
    /// let cipher = machine.process_text("HELLOHOWAREYOU", NonLetterPolicy::PassThrough).unwrap();
    /// assert_eq!(cipher, "DXXIQUIJZMNBEH");
    /// ```
    pub fn enigma_i(
        rotors: &[RotorType],
        ring_settings: &str,
        positions: &str,
        plugboard: PairPlugboard,
        reflector: WiredReflector,
    ) -> Result<CipherEngine, EnigmaError> {
        if rotors.len() != Self::ROTOR_COUNT {
            return Err(ValidationError::RotorCount {
                expected: Self::ROTOR_COUNT,
                actual: rotors.len(),
            }
            .into());
        }
        let rings = settings("ring settings", ring_settings)?;
        let starts = settings("positions", positions)?;

        let wheels = rotors
            .iter()
            .zip(rings)
            .zip(starts)
            .map(|((&rotor_type, ring), start)| Self::rotor(rotor_type, ring, start))
            .collect::<Result<Vec<_>, ValidationError>>()?;

        debug!(
            rotors = ?rotors,
            ring_settings,
            positions,
            plugs = plugboard.connections().len(),
            "assembled Enigma I"
        );
        Ok(CipherEngine::new(wheels, plugboard, reflector)?)
    }
}

/// Splits a per-rotor settings string, checking its length.
fn settings(name: &'static str, value: &str) -> Result<Vec<char>, ValidationError> {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != MachineFactory::ROTOR_COUNT {
        return Err(ValidationError::SettingsLength {
            name,
            expected: MachineFactory::ROTOR_COUNT,
            actual: chars.len(),
        });
    }
    Ok(chars)
}
