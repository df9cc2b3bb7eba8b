//! Enigma I rotor cipher machine.
//!
//! A software model of the three-rotor Wehrmacht Enigma I: five historical
//! rotors, reflectors A, B and C, a ten-cable plugboard, ring settings and
//! the double-stepping rotor mechanism. The machine is self-reciprocal, so
//! the same key that encrypts a message also decrypts it.
//!
//! All rotor-ordered arguments and results are left-to-right, the way the
//! windows read: slow rotor first, fast rotor last.
//!
//! # Architecture
//!
//! ```text
//! Letter / RotorPosition   (validated A-Z values)
//!     ↓
//! Rotor, Plugboard, Reflector   (traits + wired implementations)
//!     ↓ owned by
//! CipherEngine   (stepping + signal path, LetterCipher)
//!     ↑ assembled by
//! MachineFactory ← MachineConfig (serde)
//!     ↑ driven by
//! Session   (TextTransformer + per-keypress transcript)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the same settings:
//!
//! ```
//! use enigma::{LetterCipher, MachineFactory, NonLetterPolicy, PairPlugboard, RotorType, WiredReflector};
//!
//! let build = || {
//!     MachineFactory::enigma_i(
//!         &[RotorType::I, RotorType::II, RotorType::III],
//!         "AAA",
//!         "AAA",
//!         PairPlugboard::new(),
//!         WiredReflector::default(),
//!     )
//!     .unwrap()
//! };
//!
//! let cipher = build().process_text("HI THERE!", NonLetterPolicy::PassThrough).unwrap();
//! assert_eq!(cipher, "IO HKRTK!");
//!
//! let plain = build().process_text(&cipher, NonLetterPolicy::PassThrough).unwrap();
//! assert_eq!(plain, "HI THERE!");
//! ```
//!
//! Drive whole messages from a JSON key:
//!
//! ```
//! use enigma::{MachineConfig, Session};
//!
//! let config = MachineConfig::from_json(r#"{
//!     "rotors": ["I", "III", "V"],
//!     "ring_settings": "BBB",
//!     "positions": "WWW",
//!     "plugboard": ["BA", "QU", "CG", "XT", "DI", "ER", "JW", "LS", "VK", "NM"]
//! }"#).unwrap();
//!
//! let session = Session::new(config);
//! let transcript = session.encrypt("Hello, how are things").unwrap();
//! assert_eq!(transcript.steps.len(), 18);
//! assert_eq!(session.decrypt(&transcript.text).unwrap(), "HELLO, HOW ARE THINGS");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod text;

mod config;
mod engine;
mod factory;
mod letter;
mod plugboard;
mod position;
mod reflector;
mod rotor;
mod session;
pub(crate) mod utils;

pub use config::{MachineConfig, NonLetterPolicy};
pub use engine::{CipherEngine, LetterCipher, MachineState};
pub use error::{EnigmaError, OperationError, ValidationError};
pub use factory::MachineFactory;
pub use letter::{Letter, ALPHABET_LEN};
pub use plugboard::{PairPlugboard, Plugboard, PlugboardPair, MAX_PAIRS};
pub use position::RotorPosition;
pub use reflector::{Reflector, ReflectorType, WiredReflector};
pub use rotor::{Rotor, RotorType, WiredRotor};
pub use session::{Session, StepRecord, Transcript};
pub use text::{PunctuationTransformer, TextTransformer, UnmappedSymbols};
