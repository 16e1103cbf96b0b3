use thiserror::Error;

/// Error type for codec operations.
///
/// All positions are 0-based character indices into the operation's input
/// (the raw text for `compress`, the encoded text for `decompress`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// `compress` was handed a zero-length sequence.
    #[error("Empty input: nothing to compress")]
    EmptyInput,
    /// The input contained a symbol the encoding cannot represent
    /// unambiguously (an ASCII decimal digit).
    #[error("Unsupported symbol '{symbol}' at position {position}: digits are reserved for run counts")]
    UnsupportedAlphabet { symbol: char, position: usize },
    /// The encoded text violated the token grammar: a symbol was not followed
    /// by at least one count digit.
    #[error("Malformed input at position {position}: expected at least one count digit")]
    MalformedInput { position: usize },
    /// A run count in the encoded text does not fit in `usize`.
    #[error("Count overflow at position {position}: run count is too large to represent")]
    CountOverflow { position: usize },
}
