//! Session: text in, ciphertext plus per-keypress transcript out.
//!
//! A session holds a [`MachineConfig`] and a [`TextTransformer`]. Every
//! [`encrypt`](Session::encrypt) or [`decrypt`](Session::decrypt) call
//! builds a fresh engine from the config, so calls never share rotor state
//! and the receiving side only needs the same config to read a message.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::{MachineConfig, NonLetterPolicy};
use crate::engine::LetterCipher;
use crate::error::EnigmaError;
use crate::letter::Letter;
use crate::plugboard::PlugboardPair;
use crate::text::{PunctuationTransformer, TextTransformer};

/// One keypress: the letter typed, the lamp that lit, and the machine
/// state right after the rotors stepped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Letter typed.
    pub input: Letter,
    /// Letter lit.
    pub output: Letter,
    /// Window letters after stepping, left-to-right.
    pub rotor_positions: Vec<Letter>,
    /// Plugboard cables.
    pub plugboard: Vec<PlugboardPair>,
}

/// Result of [`Session::encrypt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Ciphertext, non-letters in place.
    pub text: String,
    /// One record per enciphered letter.
    pub steps: Vec<StepRecord>,
}

/// Encrypts and decrypts whole texts under one machine configuration.
#[derive(Debug, Clone)]
pub struct Session<T: TextTransformer = PunctuationTransformer> {
    config: MachineConfig,
    transformer: T,
}

impl Session {
    /// Creates a session with the default punctuation table.
    pub fn new(config: MachineConfig) -> Self {
        Session {
            config,
            transformer: PunctuationTransformer::new(),
        }
    }
}

impl<T: TextTransformer> Session<T> {
    /// Creates a session with a custom transformer.
    pub fn with_transformer(config: MachineConfig, transformer: T) -> Self {
        Session {
            config,
            transformer,
        }
    }

    /// The machine configuration.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Encrypts `text` on a fresh machine.
    ///
    /// The text is tokenized first, so punctuation becomes letter groups
    /// and lowercase becomes uppercase. Under [`NonLetterPolicy::Reject`]
    /// every input character must be a letter or tokenize to letters only;
    /// whitespace and symbols the transformer would drop fail the call.
    ///
    /// # Errors
    /// Returns an error if the config does not build a machine, or
    /// [`EnigmaError::StrictMode`] as described above.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{MachineConfig, Session};
    ///
    /// let session = Session::new(MachineConfig::default());
    /// let transcript = session.encrypt("Hi there!").unwrap();
    /// assert_eq!(transcript.text, "IO HKRTK");
    /// assert_eq!(transcript.steps.len(), 7);
    /// ```
    pub fn encrypt(&self, text: &str) -> Result<Transcript, EnigmaError> {
        let mut engine = self.config.build()?;
        self.check_tokenizable(text)?;
        let tokens = self.transformer.encode(text);
        self.check_strict(&tokens)?;

        let mut out = String::with_capacity(tokens.len());
        let mut steps = Vec::new();
        for ch in tokens.chars() {
            let Ok(input) = Letter::new(ch) else {
                out.push(ch);
                continue;
            };
            let output = engine.process_letter(input);
            let state = engine.snapshot();
            trace!(%input, %output, window = %engine.window(), "keypress");
            out.push(output.as_char());
            steps.push(StepRecord {
                input,
                output,
                rotor_positions: state.rotor_positions,
                plugboard: state.plugboard,
            });
        }

        debug!(
            chars = text.chars().count(),
            letters = steps.len(),
            window = %engine.window(),
            "encrypted text"
        );
        Ok(Transcript { text: out, steps })
    }

    /// Decrypts `ciphertext` on a fresh machine and maps letter groups
    /// back to punctuation.
    ///
    /// # Errors
    /// Returns an error if the config does not build a machine, or
    /// [`EnigmaError::StrictMode`] under [`NonLetterPolicy::Reject`] when
    /// the ciphertext holds a non-letter.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, EnigmaError> {
        let mut engine = self.config.build()?;
        self.check_strict(ciphertext)?;
        let plain = engine.process_text(ciphertext, NonLetterPolicy::PassThrough)?;
        debug!(chars = ciphertext.chars().count(), window = %engine.window(), "decrypted text");
        Ok(self.transformer.decode(&plain))
    }

    fn strict(&self) -> bool {
        self.config.non_letters == NonLetterPolicy::Reject
    }

    /// Rejects raw characters the transformer drops or cannot turn into
    /// letters.
    fn check_tokenizable(&self, text: &str) -> Result<(), EnigmaError> {
        if !self.strict() {
            return Ok(());
        }
        let mut buf = [0u8; 4];
        for (position, character) in text.chars().enumerate() {
            if Letter::new(character).is_ok() {
                continue;
            }
            let token = self.transformer.encode(character.encode_utf8(&mut buf));
            if token.is_empty() || token.chars().any(|c| Letter::new(c).is_err()) {
                return Err(reject(character, position));
            }
        }
        Ok(())
    }

    fn check_strict(&self, text: &str) -> Result<(), EnigmaError> {
        if !self.strict() {
            return Ok(());
        }
        match text.chars().enumerate().find(|(_, c)| Letter::new(*c).is_err()) {
            Some((position, character)) => Err(reject(character, position)),
            None => Ok(()),
        }
    }
}

fn reject(character: char, position: usize) -> EnigmaError {
    warn!(?character, position, "rejected non-letter in strict mode");
    EnigmaError::StrictMode {
        character,
        position,
    }
}
