//! Text tokenization around the cipher core.
//!
//! The machine only understands letters. A [`TextTransformer`] maps free
//! text onto letters and whitespace before enciphering, and maps tokens
//! back to punctuation after deciphering.

pub mod punctuation;
pub mod transformer;

pub use punctuation::{PunctuationTransformer, UnmappedSymbols};
pub use transformer::TextTransformer;
