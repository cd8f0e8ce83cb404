//! Interweave core engine.
//!
//! Given a candidate sequence `s` of binary symbols and two periodic binary
//! signals `x` and `y`, finds the longest chain of positions in `s` that can
//! be explained as an interleaving of whole repetitions of `x` and `y`. The
//! chain may only end where both signals have completed an integral number
//! of full periods.

pub mod generator;
pub mod search;

pub use generator::{SequenceGenerator, DEFAULT_SEED};
pub use search::{
    Chain, ChainEntry, MatchPool, MatchTable, OpCounters, RunSummary, SearchResult, Searcher,
    Signal,
};

use thiserror::Error;

/// Boundary validation error for candidate and signal sequences.
///
/// The search core assumes validated input and performs no symbol checking
/// itself; callers reject malformed sequences with these errors before
/// searching.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid character '{ch}' at index {index}; sequences are written in 0s and 1s")]
    InvalidChar { index: usize, ch: char },
    #[error("invalid symbol {symbol} at index {index}; symbols must be 0 or 1")]
    InvalidSymbol { index: usize, symbol: u8 },
}

/// Parse a binary sequence from text, e.g. `"01101"`.
pub fn parse_sequence(text: &str) -> Result<Vec<u8>, SequenceError> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| match ch {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(SequenceError::InvalidChar { index, ch }),
        })
        .collect()
}

/// Validate that every symbol of a sequence is 0 or 1.
pub fn validate_sequence(seq: &[u8]) -> Result<(), SequenceError> {
    for (index, &symbol) in seq.iter().enumerate() {
        if symbol > 1 {
            return Err(SequenceError::InvalidSymbol { index, symbol });
        }
    }
    Ok(())
}

/// Render a binary sequence as text.
pub fn sequence_to_string(seq: &[u8]) -> String {
    seq.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}
