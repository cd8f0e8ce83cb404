//! Summary writers: text, CSV, and JSON renderings of run summaries.

use anyhow::{Context, Result};
use interweave_core::RunSummary;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::OutputFormat;

const CSV_HEADER: &str =
    "run,s,x,y,s_len,x_len,y_len,x_count,y_count,interweaving,interweaving_len,n_ops,n_comps";

/// Write summaries to the given path, or stdout when no path is set.
pub fn write_summaries(
    summaries: &[RunSummary],
    format: OutputFormat,
    path: Option<&str>,
) -> Result<()> {
    match path {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("failed to create output file: {}", p))?;
            let mut writer = BufWriter::new(file);
            write_to(&mut writer, summaries, format)?;
            writer.flush()?;
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_to(&mut handle, summaries, format)
        }
    }
}

fn write_to(w: &mut impl Write, summaries: &[RunSummary], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(w, summaries),
        OutputFormat::Csv => write_csv(w, summaries),
        OutputFormat::Json => write_json(w, summaries),
    }
}

fn write_text(w: &mut impl Write, summaries: &[RunSummary]) -> Result<()> {
    for summary in summaries {
        writeln!(w, "run {}", summary.run)?;
        writeln!(w, "  s = {} (len {})", summary.s, summary.s_len)?;
        writeln!(w, "  x = {} (len {})", summary.x, summary.x_len)?;
        writeln!(w, "  y = {} (len {})", summary.y, summary.y_len)?;
        writeln!(
            w,
            "  interweaving = {} (len {}, {} from x, {} from y)",
            summary.interweaving, summary.interweaving_len, summary.x_count, summary.y_count
        )?;
        writeln!(
            w,
            "  cost: {} ops, {} comparisons",
            summary.n_ops, summary.n_comps
        )?;
    }
    Ok(())
}

// Every field is numeric or a 0/1 string, so no quoting is needed.
fn write_csv(w: &mut impl Write, summaries: &[RunSummary]) -> Result<()> {
    writeln!(w, "{}", CSV_HEADER)?;
    for s in summaries {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
            s.run,
            s.s,
            s.x,
            s.y,
            s.s_len,
            s.x_len,
            s.y_len,
            s.x_count,
            s.y_count,
            s.interweaving,
            s.interweaving_len,
            s.n_ops,
            s.n_comps
        )?;
    }
    Ok(())
}

fn write_json(w: &mut impl Write, summaries: &[RunSummary]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, summaries).context("failed to serialize summaries")?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use interweave_core::Searcher;

    fn sample_summary() -> RunSummary {
        Searcher::new()
            .search(&[0, 1, 1, 0], &[0, 1], &[1, 0])
            .summarize(0)
    }

    #[test]
    fn test_csv_output_shape() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[sample_summary()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next().unwrap(), CSV_HEADER);
        let row = lines.next().unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0], "0");
        assert_eq!(fields[1], "0110");
        assert_eq!(fields[9], "10");
        assert_eq!(fields[10], "2");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_json_output_roundtrips() {
        let summary = sample_summary();
        let mut buf = Vec::new();
        write_json(&mut buf, std::slice::from_ref(&summary)).unwrap();
        let back: Vec<RunSummary> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, vec![summary]);
    }

    #[test]
    fn test_text_output_mentions_interweaving() {
        let mut buf = Vec::new();
        write_text(&mut buf, &[sample_summary()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("interweaving = 10 (len 2, 2 from x, 0 from y)"));
    }
}
