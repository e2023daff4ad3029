use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use ipward_common::config::Config;
use ipward_core::is_in_any_range;
use rayon::prelude::*;
use tracing::debug;

use crate::commands::split_ranges;
use crate::terminal::{colors, format, print};
use crate::mprint;

/// Evaluates every non-blank line of `file` (stdin when absent) against `ranges`.
///
/// Returns `true` when every candidate is allowed.
pub fn batch(ranges: &str, file: Option<&Path>, cfg: &Config) -> anyhow::Result<bool> {
    let candidates: Vec<String> = read_candidates(file)?;
    let entries: Vec<&str> = split_ranges(ranges);

    let start_time: Instant = Instant::now();
    let results: Vec<(&str, bool)> = evaluate_all(&candidates, &entries);
    let total_time: Duration = start_time.elapsed();

    debug!(candidates = results.len(), "Batch evaluation finished");

    for (candidate, allowed) in &results {
        print::print(&format!("{} {}", candidate, format::verdict(*allowed)));
    }

    let allowed: usize = results.iter().filter(|(_, allowed)| *allowed).count();
    print_summary(allowed, results.len(), total_time, cfg);

    Ok(allowed == results.len())
}

/// Checks every candidate in parallel, keeping input order.
pub fn evaluate_all<'a, S>(candidates: &'a [String], entries: &[S]) -> Vec<(&'a str, bool)>
where
    S: AsRef<str> + Sync,
{
    candidates
        .par_iter()
        .map(|candidate| {
            let candidate: &str = candidate.as_str();
            (candidate, is_in_any_range(candidate, entries))
        })
        .collect()
}

fn read_candidates(file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut candidates: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line: String = line.context("failed to read candidate list")?;
        let line: &str = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        candidates.push(line.to_string());
    }
    Ok(candidates)
}

fn print_summary(allowed: usize, total: usize, total_time: Duration, cfg: &Config) {
    let allowed_str: ColoredString = format!("{allowed} allowed").bold().color(colors::ALLOWED);
    let denied_str: ColoredString = format!("{} denied", total - allowed)
        .bold()
        .color(colors::DENIED);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Batch Complete: {allowed_str}, {denied_str} in {total_time}")
            .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            print::print(&output.to_string());
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
