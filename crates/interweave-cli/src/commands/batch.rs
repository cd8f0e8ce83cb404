use anyhow::{bail, Context, Result};
use interweave_core::{validate_sequence, Searcher, SequenceGenerator};

use crate::{output, OutputFormat};

pub fn run(
    runs: usize,
    seed: u64,
    s_len: usize,
    x_len: usize,
    y_len: usize,
    format: OutputFormat,
    output_path: Option<&str>,
) -> Result<()> {
    if x_len == 0 || y_len == 0 {
        bail!("signal lengths must be at least 1");
    }

    let mut generator = SequenceGenerator::with_seed(seed);
    let searcher = Searcher::new();
    let mut summaries = Vec::with_capacity(runs);

    for run in 0..runs {
        let x = generator.generate(x_len);
        let y = generator.generate(y_len);
        let s = generator.generate(s_len);
        validate_sequence(&s).context("invalid candidate sequence")?;

        let result = searcher.search(&s, &x, &y);
        let summary = result.summarize(run);
        log::debug!(
            "run {}: interweaving length {} ({} ops, {} comps)",
            run,
            summary.interweaving_len,
            summary.n_ops,
            summary.n_comps
        );
        summaries.push(summary);
    }

    output::write_summaries(&summaries, format, output_path)
}
