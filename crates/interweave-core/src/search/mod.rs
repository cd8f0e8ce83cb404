//! Longest-interleaving search.
//!
//! Pipeline: candidate table → adjacency linker → rank-grouped selection.
//! The selector walks rank groups from highest to lowest, reconstructs one
//! chain per group, prunes it to complete-period boundaries, and keeps the
//! longest survivor.

mod linker;
mod path;
mod table;
mod types;

use std::collections::HashSet;

pub use linker::{link_table, MatchPool};
pub use path::{build_chain, prune_chain};
pub use table::{cell_index, cell_pos, Cell, MatchTable};
pub use types::{Chain, ChainEntry, OpCounters, RunSummary, SearchResult, Signal};

/// Unit struct searcher — stateless, all state is per-call.
pub struct Searcher;

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a new searcher.
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline over one `(s, x, y)` instance.
    ///
    /// Caller contract: `x` and `y` are non-empty. An empty `s` yields an
    /// empty chain; "no valid interleaving" is an empty chain, never an
    /// error.
    pub fn search(&self, s: &[u8], x: &[u8], y: &[u8]) -> SearchResult {
        debug_assert!(
            !x.is_empty() && !y.is_empty(),
            "signals must be non-empty"
        );

        let mut counters = OpCounters::default();
        let mut table = MatchTable::build(s, x, y);
        let pool = link_table(&mut table, &mut counters);
        let chain = select_longest(&table, &pool, x.len(), y.len(), &mut counters);

        SearchResult {
            s: s.to_vec(),
            x: x.to_vec(),
            y: y.to_vec(),
            chain,
            counters,
        }
    }
}

/// Drive the search over rank groups, highest first.
fn select_longest(
    table: &MatchTable,
    pool: &MatchPool,
    x_len: usize,
    y_len: usize,
    counters: &mut OpCounters,
) -> Chain {
    let groups = pool.ranks_grouping(table);
    let mut best = Chain::new();
    let mut used: HashSet<usize> = HashSet::new();

    for (&rank, group) in groups.iter().rev() {
        counters.ops += 1;
        if rank == 0 {
            return best;
        }
        // No chain starting at this rank can beat the current best: a chain
        // rooted at rank r has at most r entries.
        if best.len() > rank {
            return best;
        }

        // Only the first not-yet-consumed cell of the group is explored;
        // chains already walked cover the rest.
        let start = match group.iter().find(|&&idx| !used.contains(&idx)) {
            Some(&idx) => idx,
            None => continue,
        };

        let chain = build_chain(table, start, counters);
        for entry in chain.iter() {
            used.insert(cell_index(table.len, entry.i, entry.j));
            counters.ops += 1;
        }

        let pruned = prune_chain(chain, x_len, y_len, counters);
        if pruned.len() > best.len() {
            best = pruned;
        }
    }

    best
}
