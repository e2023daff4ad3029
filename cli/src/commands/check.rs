use colored::*;
use ipward_common::config::Config;
use ipward_core::{MatchDecision, evaluate};

use crate::commands::split_ranges;
use crate::terminal::{colors, format, print};

/// Evaluates `address` against `ranges` and prints the decision.
///
/// Returns `true` when the address is allowed.
pub fn check(address: &str, ranges: &str, cfg: &Config) -> bool {
    let entries: Vec<&str> = split_ranges(ranges);
    let decision: MatchDecision = evaluate(address, &entries);

    print_decision(address, &decision, cfg);
    decision.is_allowed()
}

fn print_decision(address: &str, decision: &MatchDecision, cfg: &Config) {
    if cfg.quiet > 0 {
        print::print(&format!("{} {}", address.trim(), format::verdict(decision.is_allowed())));
        return;
    }

    print::tree_head(0, address.trim());
    let mut details: Vec<format::Detail> = vec![(
        String::from("Decision"),
        format::verdict(decision.is_allowed()),
    )];
    details.extend(format::decision_to_details(decision));
    print::as_tree_one_level(details);

    if !decision.skipped.is_empty() {
        let note: ColoredString = format!("{} range entries were skipped", decision.skipped.len())
            .color(colors::SKIPPED);
        print::print_status(note.to_string());
    }
}
