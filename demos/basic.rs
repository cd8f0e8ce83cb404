//! Basic example of using the interleaving search engine

use interweave_core::search::{link_table, MatchTable, OpCounters};
use interweave_core::{sequence_to_string, Searcher, SequenceGenerator, Signal, DEFAULT_SEED};

fn main() {
    // Generate a random instance
    println!("Generating a random instance (seed {})...\n", DEFAULT_SEED);
    let mut generator = SequenceGenerator::with_seed(DEFAULT_SEED);
    let x = generator.generate(2);
    let y = generator.generate(2);
    let s = generator.generate(12);

    println!("s = {}", sequence_to_string(&s));
    println!("x = {}", sequence_to_string(&x));
    println!("y = {}\n", sequence_to_string(&y));

    // Peek at the linked table
    let mut table = MatchTable::build(&s, &x, &y);
    let mut counters = OpCounters::default();
    let pool = link_table(&mut table, &mut counters);
    println!("{} matched cells", pool.len());
    if let Some(cell) = pool.max_rank_cell(&table) {
        println!("highest rank: {} at ({}, {})\n", cell.rank, cell.i, cell.j);
    }

    // Run the full search
    println!("Searching...\n");
    let searcher = Searcher::new();
    let result = searcher.search(&s, &x, &y);

    if result.chain.is_empty() {
        println!("No complete interleaving found.");
    } else {
        println!(
            "Longest interleaving has {} symbols ({} from x, {} from y):",
            result.chain.len(),
            result.chain.count_signal(Signal::X),
            result.chain.count_signal(Signal::Y)
        );
        for (rank, entry) in result.chain.iter_ranked() {
            println!(
                "  rank {:>2}: s[{}] = {} via {}",
                rank, entry.target_index, entry.matched_char, entry.signal
            );
        }
    }

    // Summarize for reporting
    let summary = result.summarize(0);
    println!(
        "\ncost: {} operations, {} comparisons",
        summary.n_ops, summary.n_comps
    );
}
