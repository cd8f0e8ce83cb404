use anyhow::{bail, Context, Result};
use interweave_core::search::{link_table, MatchTable, OpCounters};
use interweave_core::{parse_sequence, Searcher};

use crate::{output, OutputFormat};

pub fn run(
    s: &str,
    x: &str,
    y: &str,
    format: OutputFormat,
    output_path: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let s = parse_sequence(s).context("invalid candidate sequence")?;
    let x = parse_sequence(x).context("invalid signal x")?;
    let y = parse_sequence(y).context("invalid signal y")?;
    if x.is_empty() || y.is_empty() {
        bail!("signals x and y must be non-empty");
    }

    if verbose {
        log_rank_table(&s, &x, &y);
    }

    let result = Searcher::new().search(&s, &x, &y);
    let summary = result.summarize(0);
    output::write_summaries(&[summary], format, output_path)
}

/// Re-run the table and link passes to log the rank grid and the top cell.
fn log_rank_table(s: &[u8], x: &[u8], y: &[u8]) {
    let mut table = MatchTable::build(s, x, y);
    let mut counters = OpCounters::default();
    let pool = link_table(&mut table, &mut counters);

    for (i, row) in table.rank_grid().iter().enumerate() {
        let rendered: Vec<String> = row.iter().map(|r| r.to_string()).collect();
        log::info!("rank row {:>3}: {}", i, rendered.join(" "));
    }
    match pool.max_rank_cell(&table) {
        Some(cell) => log::info!(
            "max rank {} at ({}, {}), {} matched cells",
            cell.rank,
            cell.i,
            cell.j,
            pool.len()
        ),
        None => log::info!("no cell matched"),
    }
}
