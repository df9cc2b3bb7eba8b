//! PunctuationTransformer: the historical punctuation-to-letters convention.
//!
//! Operators spelled punctuation out as short letter groups. The default
//! table is:
//!
//! | symbol       | token |
//! |--------------|-------|
//! | `.`          | `X`   |
//! | `:`          | `XX`  |
//! | `?`          | `UD`  |
//! | `,`          | `Y`   |
//! | `/` and `-`  | `YY`  |
//! | `(` and `)`  | `KK`  |
//!
//! Decoding always prefers the longest token at the current position, so
//! `XX` reads as `:` rather than `..`. Symbols that share a token collapse
//! to one canonical form: `YY` decodes to `/` and `KK` decodes to `()`.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::text::transformer::TextTransformer;

/// Default symbol table, in precedence order.
const DEFAULT_MAPPING: [(char, &str); 8] = [
    ('.', "X"),
    (':', "XX"),
    ('?', "UD"),
    (',', "Y"),
    ('/', "YY"),
    ('-', "YY"),
    ('(', "KK"),
    (')', "KK"),
];

/// Canonical decodings for tokens shared by several symbols.
const CANONICAL: [(&str, &str); 2] = [("YY", "/"), ("KK", "()")];

/// What [`PunctuationTransformer::encode`] does with symbols it has no
/// token for. Letters outside ASCII count as such symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmappedSymbols {
    /// Remove them, keeping the output cipherable.
    #[default]
    Drop,
    /// Copy them through unchanged.
    Keep,
}

/// Table-driven [`TextTransformer`].
#[derive(Debug, Clone)]
pub struct PunctuationTransformer {
    to_token: HashMap<char, String>,
    /// Reverse table, longest token first.
    from_token: Vec<(String, String)>,
    unmapped: UnmappedSymbols,
}

impl Default for PunctuationTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl PunctuationTransformer {
    /// Creates a transformer with the default table, dropping unmapped
    /// symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{PunctuationTransformer, TextTransformer};
    ///
    /// let t = PunctuationTransformer::new();
    /// assert_eq!(t.encode("Stop. Go"), "STOPX GO");
    /// assert_eq!(t.decode("STOPX GO"), "STOP. GO");
    /// ```
    pub fn new() -> Self {
        let mapping = DEFAULT_MAPPING
            .iter()
            .map(|&(symbol, token)| (symbol, token.to_string()))
            .collect();
        Self::build(mapping, UnmappedSymbols::Drop)
    }

    /// Creates a transformer with a custom table.
    ///
    /// When several symbols share a token, the first one listed becomes
    /// its decoding, except for the canonical `YY` and `KK` forms.
    ///
    /// # Parameters
    /// - `mapping`: `(symbol, token)` pairs; tokens are uppercased.
    /// - `unmapped`: Policy for symbols missing from `mapping`.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidToken`] if a token is empty or
    /// contains anything but ASCII letters.
    pub fn with_mapping<I, S>(mapping: I, unmapped: UnmappedSymbols) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mapping = mapping
            .into_iter()
            .map(|(symbol, token)| Ok((symbol, validate_token(token.as_ref())?)))
            .collect::<Result<Vec<_>, ValidationError>>()?;
        Ok(Self::build(mapping, unmapped))
    }

    /// Same table with a different policy for unmapped symbols.
    pub fn with_unmapped(mut self, unmapped: UnmappedSymbols) -> Self {
        self.unmapped = unmapped;
        self
    }

    fn build(mapping: Vec<(char, String)>, unmapped: UnmappedSymbols) -> Self {
        let mut from_token: Vec<(String, String)> = Vec::new();
        for (symbol, token) in &mapping {
            if !from_token.iter().any(|(t, _)| t == token) {
                from_token.push((token.clone(), symbol.to_string()));
            }
        }
        for (token, text) in CANONICAL {
            if let Some(entry) = from_token.iter_mut().find(|(t, _)| t == token) {
                entry.1 = text.to_string();
            }
        }
        from_token.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        PunctuationTransformer {
            to_token: mapping.into_iter().collect::<HashMap<_, _>>(),
            from_token,
            unmapped,
        }
    }
}

impl TextTransformer for PunctuationTransformer {
    fn encode(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 2);
        for ch in input.chars() {
            if ch.is_ascii_alphabetic() {
                out.push(ch.to_ascii_uppercase());
            } else if ch.is_whitespace() {
                out.push(ch);
            } else if let Some(token) = self.to_token.get(&ch) {
                out.push_str(token);
            } else if self.unmapped == UnmappedSymbols::Keep {
                out.push(ch);
            }
        }
        out
    }

    fn decode(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(ch) = rest.chars().next() {
            if ch.is_ascii_alphabetic() {
                let matched = self
                    .from_token
                    .iter()
                    .find(|(token, _)| rest.starts_with(token.as_str()));
                if let Some((token, text)) = matched {
                    out.push_str(text);
                    rest = &rest[token.len()..];
                    continue;
                }
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        out
    }
}

fn validate_token(token: &str) -> Result<String, ValidationError> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidToken(token.to_string()));
    }
    Ok(token.to_ascii_uppercase())
}
