//! Chain reconstruction and complete-period pruning.

use super::table::{Cell, MatchTable};
use super::types::{Chain, ChainEntry, OpCounters, Signal};

fn entry_for(cell: &Cell, signal: Signal) -> ChainEntry {
    ChainEntry {
        i: cell.i,
        j: cell.j,
        signal,
        target_index: cell.i + cell.j,
        matched_char: cell
            .target_char
            .expect("matched cell carries a target symbol"),
    }
}

/// Reconstruct the chain ending at `start` by walking backward links.
///
/// The start entry is tagged `X` when the cell has an x-match, `Y`
/// otherwise. Each backward step prefers `left` over `up`; moving via
/// `left` tags `X`, via `up` tags `Y`. A rank-0 start yields the empty
/// chain.
pub fn build_chain(table: &MatchTable, start: usize, counters: &mut OpCounters) -> Chain {
    let mut chain = Chain::new();
    let cell = &table.cells[start];
    counters.ops += 1;
    if cell.rank == 0 {
        return chain;
    }

    let signal = if cell.x_match { Signal::X } else { Signal::Y };
    chain.push(entry_for(cell, signal));

    let mut idx = start;
    while table.cells[idx].rank > 1 {
        let cur = &table.cells[idx];
        counters.comps += 1;
        let (next, signal) = if let Some(left) = cur.left {
            (left, Signal::X)
        } else if let Some(up) = cur.up {
            (up, Signal::Y)
        } else {
            break;
        };
        chain.push(entry_for(&table.cells[next], signal));
        counters.ops += 2;
        idx = next;
    }

    chain
}

/// Trim a chain to "complete-period" boundaries.
///
/// While the x-tagged count is not a multiple of `x_len` or the y-tagged
/// count is not a multiple of `y_len`, the highest-rank entry is dropped.
/// The empty chain is trivially complete, so this always terminates.
///
/// Caller contract: `x_len >= 1` and `y_len >= 1`.
pub fn prune_chain(
    mut chain: Chain,
    x_len: usize,
    y_len: usize,
    counters: &mut OpCounters,
) -> Chain {
    let mut x_count = chain.count_signal(Signal::X);
    let mut y_count = chain.count_signal(Signal::Y);
    counters.ops += 2;

    while x_count % x_len != 0 || y_count % y_len != 0 {
        match chain.pop_highest() {
            Some(dropped) => match dropped.signal {
                Signal::X => x_count -= 1,
                Signal::Y => y_count -= 1,
            },
            None => break,
        }
        counters.ops += 2;
    }

    chain
}
