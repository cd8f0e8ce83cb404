//! Adjacency linking and rank propagation.
//!
//! A single row-major pass over the upper-triangular region registers every
//! matched cell in the match pool, forms the forward links between chaining
//! matches, and propagates ranks. Row-major order guarantees `(i, j-1)` and
//! `(i-1, j)` are finalized before `(i, j)`, so the pass is a one-shot
//! longest-path computation over the planar DAG.

use std::collections::{BTreeMap, HashMap};

use super::table::{cell_index, Cell, MatchTable};
use super::types::OpCounters;

/// Registry of all matched cells, keyed by grid position.
///
/// Built incrementally during linking, read-only afterward. Registration
/// order is preserved; every tie-break in the search is defined in terms of
/// it.
#[derive(Debug, Default)]
pub struct MatchPool {
    /// Arena indices in registration order
    order: Vec<usize>,
    /// (i, j) → arena index
    by_key: HashMap<(usize, usize), usize>,
}

impl MatchPool {
    /// Number of registered cells.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no cell ever matched.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check whether a grid position is registered.
    #[inline]
    pub fn contains(&self, key: (usize, usize)) -> bool {
        self.by_key.contains_key(&key)
    }

    /// Arena indices in registration order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    fn register(&mut self, key: (usize, usize), idx: usize) {
        self.by_key.insert(key, idx);
        self.order.push(idx);
    }

    /// The registered cell with the highest rank, first encountered wins
    /// ties. Convenience entry point; the search itself iterates rank
    /// groups.
    pub fn max_rank_cell<'a>(&self, table: &'a MatchTable) -> Option<&'a Cell> {
        let mut best: Option<&Cell> = None;
        for idx in self.iter() {
            let cell = &table.cells[idx];
            if best.map_or(true, |b| cell.rank > b.rank) {
                best = Some(cell);
            }
        }
        best
    }

    /// Group registered cells by rank, preserving registration order within
    /// each group. Derived once before the search.
    pub fn ranks_grouping(&self, table: &MatchTable) -> BTreeMap<usize, Vec<usize>> {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for idx in self.iter() {
            groups.entry(table.cells[idx].rank).or_default().push(idx);
        }
        groups
    }
}

/// Run the link + rank pass over the table, returning the match pool.
pub fn link_table(table: &mut MatchTable, counters: &mut OpCounters) -> MatchPool {
    let len = table.len;
    let mut pool = MatchPool::default();

    for i in 0..len {
        for j in 0..len {
            // Cells outside the upper triangle cannot start or extend a
            // chain; the target position would exceed the sequence.
            if i + j >= len {
                continue;
            }
            let idx = cell_index(len, i, j);
            if !table.cells[idx].is_match() {
                continue;
            }

            pool.register((i, j), idx);
            counters.ops += 1;

            link_cell(table, idx, counters);

            // Left/up were finalized by earlier right/down links, so their
            // ranks are already final here.
            let left_rank = neighbor_rank(table, &pool, table.cells[idx].left);
            let up_rank = neighbor_rank(table, &pool, table.cells[idx].up);
            table.cells[idx].rank = 1 + left_rank.max(up_rank);
            counters.ops += 1;
        }
    }

    pool
}

/// Rank of a linked neighbor, counting only registered cells.
fn neighbor_rank(table: &MatchTable, pool: &MatchPool, neighbor: Option<usize>) -> usize {
    match neighbor {
        Some(n) if pool.contains(table.cells[n].key()) => table.cells[n].rank,
        _ => 0,
    }
}

/// Form the forward links out of one matched cell.
///
/// An x-link advances one column (right), a y-link advances one row (down);
/// either forms only toward another matched cell. Reverse pointers are set
/// on the target so later cells can walk backward.
fn link_cell(table: &mut MatchTable, idx: usize, counters: &mut OpCounters) {
    let len = table.len;
    let (i, j) = table.cells[idx].key();
    counters.comps += 2;

    if table.cells[idx].x_match && j + 1 < len {
        let right = cell_index(len, i, j + 1);
        if table.cells[right].is_match() {
            table.cells[idx].right = Some(right);
            table.cells[right].left = Some(idx);
            counters.ops += 2;
        }
    }
    if table.cells[idx].y_match && i + 1 < len {
        let down = cell_index(len, i + 1, j);
        if table.cells[down].is_match() {
            table.cells[idx].down = Some(down);
            table.cells[down].up = Some(idx);
            counters.ops += 2;
        }
    }
}
