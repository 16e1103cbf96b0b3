//! Run-length compression and decompression.
//!
//! The encoded representation is a sequence of tokens, each a symbol followed
//! by the decimal digits of its run count, concatenated with no separator:
//!
//! ```text
//! encoded := token*
//! token   := symbol digit+
//! symbol  := any char except '0'..='9'
//! ```
//!
//! `compress` only ever emits counts without leading zeros; `decompress`
//! accepts the superset grammar above (leading zeros contribute nothing, a
//! count of 0 expands to nothing).
//!
//! Both operations are pure functions: no state is held between calls, and a
//! failed call returns a typed error without producing partial output.

mod error;

pub use error::CodecError;

use crate::base::{Run, Symbol, runs};

/// Compress `input` into its run-length representation.
///
/// Scans the input once, left to right, and emits one `symbol + count` token
/// per maximal run: `compress("AAAABBBCCDAA")` yields `"A4B3C2D1A2"`.
///
/// Errors:
/// - `EmptyInput` if `input` has no characters.
/// - `UnsupportedAlphabet` if any character is an ASCII decimal digit, since
///   the encoded form could not distinguish it from a count. The first
///   offending character in scan order is reported.
pub fn compress(input: &str) -> Result<String, CodecError> {
    if input.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let mut encoded = String::with_capacity(input.len());
    let mut position = 0;
    for (c, len) in runs(input) {
        let symbol = Symbol::from_char(c).ok_or(CodecError::UnsupportedAlphabet {
            symbol: c,
            position,
        })?;
        // The scan never yields an empty run.
        let run = Run::new_unchecked(symbol, len);
        encoded.push_str(&run.to_string());
        position += len;
    }
    Ok(encoded)
}

/// Expand `encoded` back into the original character sequence.
///
/// Scans the encoded text left to right. Each step consumes one character as
/// the run symbol, then greedily consumes the ASCII digits that follow as the
/// run count, and appends the symbol repeated that many times. An empty input
/// decodes to an empty string (the grammar admits zero tokens).
///
/// Errors:
/// - `MalformedInput` if a symbol is followed by zero digits, either because
///   the input ended or because another symbol followed immediately. The
///   reported position is the character index where a digit was required.
/// - `CountOverflow` if a count does not fit in `usize`.
pub fn decompress(encoded: &str) -> Result<String, CodecError> {
    let mut decoded = String::with_capacity(encoded.len());
    let mut chars = encoded.chars().peekable();
    let mut position = 0;

    while let Some(symbol) = chars.next() {
        position += 1;
        let count_start = position;
        let mut count: usize = 0;
        let mut digits = 0;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            chars.next();
            count = count
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit as usize))
                .ok_or(CodecError::CountOverflow {
                    position: count_start,
                })?;
            digits += 1;
            position += 1;
        }
        if digits == 0 {
            return Err(CodecError::MalformedInput { position });
        }
        decoded.extend(std::iter::repeat(symbol).take(count));
    }
    Ok(decoded)
}
