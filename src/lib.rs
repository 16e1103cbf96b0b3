//! Runlen: a run-length codec for character sequences.
//!
//! This library compresses text into a sequence of `<symbol><count>` tokens
//! (`"AAAABBBCCDAA"` becomes `"A4B3C2D1A2"`) and expands such token sequences
//! back into the original text. Because decimal digits carry the counts in the
//! encoded form, the input alphabet excludes ASCII digits; the codec enforces
//! this rather than producing ambiguous output.

pub mod base;
pub mod codec;

// Re-export commonly used types for convenient external access.
//
// These form the public, stable surface that most consumers of the library
// will use. Re-exporting them here makes them available as `runlen::compress`,
// `runlen::Run`, etc.
pub use base::{InvalidSymbol, Run, Runs, Symbol, ZeroLengthRun, runs};
pub use codec::{CodecError, compress, decompress};
