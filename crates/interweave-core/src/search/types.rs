use std::collections::VecDeque;

use crate::sequence_to_string;
use serde::{Deserialize, Serialize};

/// Which periodic signal explained a matched position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    X,
    Y,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::X => write!(f, "x"),
            Signal::Y => write!(f, "y"),
        }
    }
}

/// One matched position in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEntry {
    /// Grid row of the matched cell
    pub i: usize,
    /// Grid column of the matched cell
    pub j: usize,
    /// Signal that explains the match
    pub signal: Signal,
    /// Position in the candidate sequence (`i + j`)
    pub target_index: usize,
    /// The matched symbol
    pub matched_char: u8,
}

/// An ordered chain of matched cells, highest rank first.
///
/// A chain of length `k` covers ranks `k` down to `1`; the entry at offset
/// `p` from the front carries rank `k - p`. Reconstruction appends entries
/// in descending rank order and pruning removes from the front, so the
/// stored order is always the reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    entries: VecDeque<ChainEntry>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the chain holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank of the chain's top entry (equals its length).
    pub fn highest_rank(&self) -> usize {
        self.entries.len()
    }

    /// Append the next-lower-rank entry during reconstruction.
    pub(crate) fn push(&mut self, entry: ChainEntry) {
        self.entries.push_back(entry);
    }

    /// Remove and return the entry at the highest remaining rank.
    pub(crate) fn pop_highest(&mut self) -> Option<ChainEntry> {
        self.entries.pop_front()
    }

    /// Entries in descending rank order.
    pub fn iter(&self) -> impl Iterator<Item = &ChainEntry> {
        self.entries.iter()
    }

    /// Entries paired with their rank, descending.
    pub fn iter_ranked(&self) -> impl Iterator<Item = (usize, &ChainEntry)> {
        let top = self.entries.len();
        self.entries.iter().enumerate().map(move |(p, e)| (top - p, e))
    }

    /// Count entries tagged with the given signal.
    pub fn count_signal(&self, signal: Signal) -> usize {
        self.entries.iter().filter(|e| e.signal == signal).count()
    }

    /// Matched symbols in descending rank order.
    pub fn interleaving(&self) -> Vec<u8> {
        self.entries.iter().map(|e| e.matched_char).collect()
    }
}

/// Operation and comparison tallies for algorithmic-cost reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounters {
    /// Low-level operations performed
    pub ops: u64,
    /// Symbol comparisons performed
    pub comps: u64,
}

/// Outcome of a full search: inputs, the winning chain, and cost counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Candidate sequence searched
    pub s: Vec<u8>,
    /// First periodic signal
    pub x: Vec<u8>,
    /// Second periodic signal
    pub y: Vec<u8>,
    /// Longest complete chain found (possibly empty)
    pub chain: Chain,
    /// Cost counters accumulated across the run
    pub counters: OpCounters,
}

impl SearchResult {
    /// Flatten this result into a per-run record for reporting.
    pub fn summarize(&self, run: usize) -> RunSummary {
        RunSummary {
            run,
            s: sequence_to_string(&self.s),
            x: sequence_to_string(&self.x),
            y: sequence_to_string(&self.y),
            s_len: self.s.len(),
            x_len: self.x.len(),
            y_len: self.y.len(),
            x_count: self.chain.count_signal(Signal::X),
            y_count: self.chain.count_signal(Signal::Y),
            interweaving: sequence_to_string(&self.chain.interleaving()),
            interweaving_len: self.chain.len(),
            n_ops: self.counters.ops,
            n_comps: self.counters.comps,
        }
    }
}

/// Flattened per-run record: inputs, outputs, and summary statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run: usize,
    pub s: String,
    pub x: String,
    pub y: String,
    pub s_len: usize,
    pub x_len: usize,
    pub y_len: usize,
    pub x_count: usize,
    pub y_count: usize,
    /// Matched symbols of the winning chain, highest rank first
    pub interweaving: String,
    pub interweaving_len: usize,
    pub n_ops: u64,
    pub n_comps: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize, j: usize, signal: Signal, matched_char: u8) -> ChainEntry {
        ChainEntry {
            i,
            j,
            signal,
            target_index: i + j,
            matched_char,
        }
    }

    #[test]
    fn test_chain_rank_accounting() {
        let mut chain = Chain::new();
        chain.push(entry(1, 2, Signal::Y, 1));
        chain.push(entry(1, 1, Signal::X, 0));
        chain.push(entry(0, 1, Signal::Y, 1));

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.highest_rank(), 3);

        let ranks: Vec<usize> = chain.iter_ranked().map(|(r, _)| r).collect();
        assert_eq!(ranks, vec![3, 2, 1]);

        let top = chain.pop_highest().unwrap();
        assert_eq!((top.i, top.j), (1, 2));
        assert_eq!(chain.highest_rank(), 2);
    }

    #[test]
    fn test_chain_signal_counts() {
        let mut chain = Chain::new();
        chain.push(entry(0, 2, Signal::Y, 1));
        chain.push(entry(0, 1, Signal::X, 1));
        chain.push(entry(0, 0, Signal::X, 0));

        assert_eq!(chain.count_signal(Signal::X), 2);
        assert_eq!(chain.count_signal(Signal::Y), 1);
        assert_eq!(chain.interleaving(), vec![1, 1, 0]);
    }

    #[test]
    fn test_empty_result_summary() {
        let result = SearchResult {
            s: vec![],
            x: vec![0],
            y: vec![1],
            chain: Chain::new(),
            counters: OpCounters::default(),
        };
        let summary = result.summarize(3);
        assert_eq!(summary.run, 3);
        assert_eq!(summary.s, "");
        assert_eq!(summary.x_count, 0);
        assert_eq!(summary.y_count, 0);
        assert_eq!(summary.interweaving, "");
        assert_eq!(summary.interweaving_len, 0);
    }

    #[test]
    fn test_summary_serde_roundtrip() {
        let summary = RunSummary {
            run: 1,
            s: "0110".into(),
            x: "01".into(),
            y: "10".into(),
            s_len: 4,
            x_len: 2,
            y_len: 2,
            x_count: 2,
            y_count: 0,
            interweaving: "10".into(),
            interweaving_len: 2,
            n_ops: 42,
            n_comps: 17,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
