//! TextTransformer trait.

/// Maps free text to and from a letters-and-whitespace representation.
///
/// Implementations are pure string transforms: they never touch machine
/// state and may be shared between sessions. Decoding is allowed to be
/// lossy when several symbols share one token.
pub trait TextTransformer {
    /// Uppercases letters and replaces symbols with letter tokens.
    fn encode(&self, input: &str) -> String;

    /// Replaces letter tokens with their canonical symbol text.
    fn decode(&self, input: &str) -> String;
}
