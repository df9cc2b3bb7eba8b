//! CipherEngine: the composed rotor machine.
//!
//! Every keypress first steps the rotors, then sends the letter along the
//! signal path:
//!
//! ```text
//! plugboard → rotors fast→slow (forward) → reflector
//!           → rotors slow→fast (backward) → plugboard
//! ```
//!
//! # Rotor order
//!
//! The public API is left-to-right, as the rotors are read through the
//! machine's windows: the slow rotor comes first and the fast rotor last.
//! Internally rotors are stored fastest-first, and [`CipherEngine::new`]
//! performs the one reversal.
//!
//! # Stepping
//!
//! With rotors indexed fastest-first, one keypress:
//!
//! 1. records which rotors sit at their notch before anything moves;
//! 2. always rotates rotor 0;
//! 3. rotates rotor `i > 0` if rotor `i - 1` was at its notch (carry), or if
//!    rotor `i` itself was at its notch and is not the slowest rotor.
//!
//! Rule 3's second clause is the double step: a middle rotor that reached
//! its notch through a carry moves again on the very next keypress,
//! dragging the rotor to its left with it.

use serde::Serialize;

use crate::config::NonLetterPolicy;
use crate::error::{EnigmaError, OperationError};
use crate::letter::Letter;
use crate::plugboard::{PairPlugboard, Plugboard, PlugboardPair};
use crate::position::RotorPosition;
use crate::reflector::{Reflector, WiredReflector};
use crate::rotor::{Rotor, WiredRotor};
use crate::text::TextTransformer;

/// Capability of a letter-at-a-time cipher machine.
///
/// The provided text methods only step the machine for letters; every
/// other character leaves the rotors where they are.
pub trait LetterCipher {
    /// Steps the machine and enciphers one letter.
    fn process_letter(&mut self, input: Letter) -> Letter;

    /// Enciphers every letter of `input`.
    ///
    /// With [`NonLetterPolicy::PassThrough`], non-letters are copied to
    /// the same position in the output. With [`NonLetterPolicy::Reject`],
    /// the whole input is checked before any letter is processed, so a
    /// rejected call leaves the machine untouched.
    ///
    /// # Errors
    /// Returns [`EnigmaError::StrictMode`] for the first non-letter under
    /// [`NonLetterPolicy::Reject`].
    fn process_text(&mut self, input: &str, policy: NonLetterPolicy) -> Result<String, EnigmaError> {
        if policy == NonLetterPolicy::Reject {
            if let Some((position, character)) = input
                .chars()
                .enumerate()
                .find(|(_, c)| Letter::new(*c).is_err())
            {
                return Err(EnigmaError::StrictMode {
                    character,
                    position,
                });
            }
        }
        Ok(pass_through(self, input))
    }

    /// Tokenizes `text` with `transformer`, then enciphers it.
    fn encode_text(&mut self, text: &str, transformer: &dyn TextTransformer) -> String {
        let tokens = transformer.encode(text);
        pass_through(self, &tokens)
    }

    /// Deciphers `ciphertext`, then maps tokens back with `transformer`.
    fn decode_text(&mut self, ciphertext: &str, transformer: &dyn TextTransformer) -> String {
        let tokens = pass_through(self, ciphertext);
        transformer.decode(&tokens)
    }
}

fn pass_through<M: LetterCipher + ?Sized>(machine: &mut M, input: &str) -> String {
    input
        .chars()
        .map(|ch| match Letter::new(ch) {
            Ok(letter) => machine.process_letter(letter).as_char(),
            Err(_) => ch,
        })
        .collect()
}

/// Read-only view of the machine after a keypress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineState {
    /// Window letters, left-to-right.
    pub rotor_positions: Vec<Letter>,
    /// Plugboard cables in connection order.
    pub plugboard: Vec<PlugboardPair>,
}

/// Rotor machine owning its rotors, plugboard and reflector.
///
/// The engine is stateful and not synchronized: each
/// [`process_letter`](LetterCipher::process_letter) call mutates rotor
/// positions. Independent sessions need independent engines; two engines
/// built from the same configuration produce identical output.
#[derive(Debug, Clone)]
pub struct CipherEngine<R = WiredRotor, P = PairPlugboard, F = WiredReflector> {
    /// Fastest rotor first.
    rotors: Box<[R]>,
    plugboard: P,
    reflector: F,
}

impl<R: Rotor, P: Plugboard, F: Reflector> CipherEngine<R, P, F> {
    /// Assembles a machine from rotors given left-to-right.
    ///
    /// The engine takes ownership of the rotors; the caller keeps no
    /// handle on them.
    ///
    /// # Errors
    /// Returns [`OperationError::NoRotors`] if `rotors` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{CipherEngine, LetterCipher, Letter, PairPlugboard, RotorType, WiredReflector, WiredRotor};
    ///
    /// let rotors = vec![
    ///     WiredRotor::from_type(RotorType::I, 'A', 'A').unwrap(),
    ///     WiredRotor::from_type(RotorType::II, 'A', 'A').unwrap(),
    ///     WiredRotor::from_type(RotorType::III, 'A', 'A').unwrap(),
    /// ];
    /// let mut engine = CipherEngine::new(rotors, PairPlugboard::new(), WiredReflector::default()).unwrap();
    ///
    /// let out = engine.process_letter(Letter::new('A').unwrap());
    /// assert_eq!(out.as_char(), 'B');
    /// assert_eq!(engine.window(), "AAB");
    /// ```
    pub fn new(rotors: Vec<R>, plugboard: P, reflector: F) -> Result<Self, OperationError> {
        if rotors.is_empty() {
            return Err(OperationError::NoRotors);
        }
        let mut rotors = rotors;
        rotors.reverse();
        Ok(CipherEngine {
            rotors: rotors.into_boxed_slice(),
            plugboard,
            reflector,
        })
    }

    /// Assembles a machine from left-to-right rotor slots.
    ///
    /// # Errors
    /// Returns [`OperationError::MissingRotor`] for the first empty slot,
    /// or [`OperationError::NoRotors`] if there are no slots.
    pub fn from_slots(slots: Vec<Option<R>>, plugboard: P, reflector: F) -> Result<Self, OperationError> {
        let rotors = slots
            .into_iter()
            .enumerate()
            .map(|(slot, rotor)| rotor.ok_or(OperationError::MissingRotor { slot }))
            .collect::<Result<Vec<R>, OperationError>>()?;
        Self::new(rotors, plugboard, reflector)
    }

    /// Number of rotors.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// Current rotor positions, left-to-right.
    pub fn rotor_positions(&self) -> Vec<RotorPosition> {
        self.rotors.iter().rev().map(Rotor::position).collect()
    }

    /// Window letters, left-to-right, e.g. `"ADV"`.
    pub fn window(&self) -> String {
        self.rotors
            .iter()
            .rev()
            .map(|r| r.position().letter().as_char())
            .collect()
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &P {
        &self.plugboard
    }

    /// The reflector.
    pub fn reflector(&self) -> &F {
        &self.reflector
    }

    /// Snapshot of rotor windows and plugboard cables.
    pub fn snapshot(&self) -> MachineState {
        MachineState {
            rotor_positions: self.rotor_positions().into_iter().map(RotorPosition::letter).collect(),
            plugboard: self.plugboard.connections(),
        }
    }

    fn step_rotors(&mut self) {
        let last = self.rotors.len() - 1;
        // Notch state of the rotor to the right, read before it moved.
        let mut carry = false;
        for (i, rotor) in self.rotors.iter_mut().enumerate() {
            let at_notch = rotor.is_at_notch();
            let double_step = i > 0 && i < last && at_notch;
            if i == 0 || carry || double_step {
                rotor.rotate();
            }
            carry = at_notch;
        }
    }
}

impl<R: Rotor, P: Plugboard, F: Reflector> LetterCipher for CipherEngine<R, P, F> {
    fn process_letter(&mut self, input: Letter) -> Letter {
        self.step_rotors();

        let mut signal = self.plugboard.transform(input);
        for rotor in self.rotors.iter() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.backward(signal);
        }
        self.plugboard.transform(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotor::RotorType;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn engine(types: [RotorType; 3], positions: &str) -> CipherEngine {
        let rotors = types
            .iter()
            .zip(positions.chars())
            .map(|(&t, p)| WiredRotor::from_type(t, 'A', p).unwrap())
            .collect();
        CipherEngine::new(rotors, PairPlugboard::new(), WiredReflector::default()).unwrap()
    }

    /// Rotor stub that counts rotations and reports a fixed notch.
    #[derive(Debug)]
    struct CountingRotor {
        position: i32,
        notch: i32,
    }

    impl Rotor for CountingRotor {
        fn forward(&self, input: Letter) -> Letter {
            input
        }
        fn backward(&self, input: Letter) -> Letter {
            input
        }
        fn rotate(&mut self) {
            self.position += 1;
        }
        fn is_at_notch(&self) -> bool {
            self.position.rem_euclid(26) == self.notch
        }
        fn position(&self) -> RotorPosition {
            RotorPosition::new(self.position)
        }
    }

    #[test]
    fn test_empty_rotor_list_fails() {
        let result = CipherEngine::<WiredRotor>::new(Vec::new(), PairPlugboard::new(), WiredReflector::default());
        assert_eq!(result.unwrap_err(), OperationError::NoRotors);
    }

    #[test]
    fn test_missing_slot_fails() {
        let slots = vec![
            Some(WiredRotor::from_type(RotorType::I, 'A', 'A').unwrap()),
            None,
            Some(WiredRotor::from_type(RotorType::III, 'A', 'A').unwrap()),
        ];
        let result = CipherEngine::from_slots(slots, PairPlugboard::new(), WiredReflector::default());
        assert_eq!(result.unwrap_err(), OperationError::MissingRotor { slot: 1 });
    }

    #[test]
    fn test_fast_rotor_always_steps() {
        let mut m = engine([RotorType::I, RotorType::II, RotorType::III], "AAA");
        m.process_letter(letter('A'));
        assert_eq!(m.window(), "AAB");
        m.process_letter(letter('A'));
        assert_eq!(m.window(), "AAC");
    }

    #[test]
    fn test_double_step_sequence() {
        let mut m = engine([RotorType::I, RotorType::II, RotorType::III], "ADU");
        let mut windows = Vec::new();
        for _ in 0..4 {
            m.process_letter(letter('A'));
            windows.push(m.window());
        }
        assert_eq!(windows, vec!["ADV", "AEW", "BFX", "BFY"]);
    }

    #[test]
    fn test_slowest_rotor_never_double_steps() {
        // Slow rotor I parked on its notch Q must not move by itself.
        let mut m = engine([RotorType::I, RotorType::II, RotorType::III], "QAA");
        for _ in 0..10 {
            m.process_letter(letter('A'));
        }
        assert_eq!(m.window(), "QAK");
    }

    #[test]
    fn test_stepping_generalizes_to_four_rotors() {
        // Every notch sits at index 0. Left-to-right: slow, two middles, fast.
        let rotors = vec![
            CountingRotor { position: 0, notch: 0 },
            CountingRotor { position: 25, notch: 0 },
            CountingRotor { position: 25, notch: 0 },
            CountingRotor { position: 0, notch: 0 },
        ];
        let mut m = CipherEngine::new(rotors, PairPlugboard::new(), WiredReflector::default()).unwrap();

        m.process_letter(letter('A'));
        let idx: Vec<u8> = m.rotor_positions().iter().map(|p| p.index()).collect();
        // Fast rotor was at its notch: the right-hand middle rotor takes the carry.
        assert_eq!(idx, vec![0, 25, 0, 1]);

        m.process_letter(letter('A'));
        let idx: Vec<u8> = m.rotor_positions().iter().map(|p| p.index()).collect();
        // Right-hand middle double-steps and carries into the left-hand middle.
        assert_eq!(idx, vec![0, 0, 1, 2]);

        m.process_letter(letter('A'));
        let idx: Vec<u8> = m.rotor_positions().iter().map(|p| p.index()).collect();
        // Left-hand middle double-steps and carries into the slow rotor, which
        // sat on its own notch the whole time without moving by itself.
        assert_eq!(idx, vec![1, 1, 1, 3]);

        m.process_letter(letter('A'));
        let idx: Vec<u8> = m.rotor_positions().iter().map(|p| p.index()).collect();
        assert_eq!(idx, vec![1, 1, 1, 4]);
    }

    #[test]
    fn test_notches_are_read_before_anything_moves() {
        // Fast and middle rotor both sit on their notch. The middle one
        // moves once although carry and double step both apply.
        let rotors = vec![
            CountingRotor { position: 0, notch: 5 },
            CountingRotor { position: 3, notch: 3 },
            CountingRotor { position: 7, notch: 7 },
        ];
        let mut m = CipherEngine::new(rotors, PairPlugboard::new(), WiredReflector::default()).unwrap();
        m.process_letter(letter('A'));
        let idx: Vec<u8> = m.rotor_positions().iter().map(|p| p.index()).collect();
        assert_eq!(idx, vec![1, 4, 8]);

        m.process_letter(letter('A'));
        let idx: Vec<u8> = m.rotor_positions().iter().map(|p| p.index()).collect();
        assert_eq!(idx, vec![1, 4, 9]);
    }

    #[test]
    fn test_single_rotor_machine_steps_every_key() {
        let rotors = vec![WiredRotor::from_type(RotorType::I, 'A', 'P').unwrap()];
        let mut m = CipherEngine::new(rotors, PairPlugboard::new(), WiredReflector::default()).unwrap();
        for _ in 0..3 {
            m.process_letter(letter('A'));
        }
        assert_eq!(m.window(), "S");
    }

    #[test]
    fn test_known_ground_setting_output() {
        let mut m = engine([RotorType::I, RotorType::II, RotorType::III], "AAA");
        let out = m.process_text("AAAAA", NonLetterPolicy::PassThrough).unwrap();
        assert_eq!(out, "BDZGO");
    }

    #[test]
    fn test_never_encrypts_letter_to_itself() {
        let mut m = engine([RotorType::II, RotorType::IV, RotorType::V], "MCK");
        for _ in 0..200 {
            for x in Letter::all().take(3) {
                assert_ne!(m.process_letter(x), x);
            }
        }
    }

    #[test]
    fn test_pass_through_keeps_rotor_state() {
        let mut with_spaces = engine([RotorType::I, RotorType::II, RotorType::III], "AAA");
        let mut without = engine([RotorType::I, RotorType::II, RotorType::III], "AAA");

        let spaced = with_spaces.process_text("HI THERE!", NonLetterPolicy::PassThrough).unwrap();
        let compact = without.process_text("HITHERE", NonLetterPolicy::PassThrough).unwrap();

        assert_eq!(spaced.chars().count(), 9);
        assert_eq!(spaced.chars().nth(2), Some(' '));
        assert_eq!(spaced.chars().last(), Some('!'));
        assert_eq!(spaced.replace([' ', '!'], ""), compact);
        assert_eq!(with_spaces.window(), without.window());
    }

    #[test]
    fn test_strict_mode_rejects_without_stepping() {
        let mut m = engine([RotorType::I, RotorType::II, RotorType::III], "AAA");
        let err = m.process_text("HI THERE!", NonLetterPolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            EnigmaError::StrictMode {
                character: ' ',
                position: 2
            }
        ));
        assert_eq!(m.window(), "AAA");
    }

    #[test]
    fn test_snapshot_is_left_to_right() {
        let m = engine([RotorType::I, RotorType::II, RotorType::III], "ADV");
        let state = m.snapshot();
        let window: String = state.rotor_positions.iter().map(|l| l.as_char()).collect();
        assert_eq!(window, "ADV");
        assert!(state.plugboard.is_empty());
    }
}
