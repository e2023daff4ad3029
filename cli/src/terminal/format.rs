use crate::terminal::colors;
use colored::*;
use ipward_common::network::RangeDescriptor;
use ipward_core::{MatchDecision, SkipReason, SkippedRange};

pub type Detail = (String, ColoredString);

pub fn verdict(allowed: bool) -> ColoredString {
    if allowed {
        "ALLOWED".color(colors::ALLOWED).bold()
    } else {
        "DENIED".color(colors::DENIED).bold()
    }
}

pub fn yes_no(value: bool) -> ColoredString {
    if value {
        "yes".color(colors::ALLOWED)
    } else {
        "no".color(colors::DENIED)
    }
}

/// Renders `a.b.c.d/p` together with the addresses it spans.
pub fn range_span(entry: &str) -> ColoredString {
    match RangeDescriptor::parse(entry).ok().and_then(|r| r.v4_bounds()) {
        Some((first, last)) => format!("{entry} ({first} - {last})").color(colors::ACCENT),
        None => entry.color(colors::ACCENT),
    }
}

fn skip_reason(reason: &SkipReason) -> String {
    match reason {
        SkipReason::InvalidNotation => String::from("invalid notation"),
        SkipReason::Internal(e) => format!("internal error: {e}"),
    }
}

pub fn skipped_to_detail(skipped: &SkippedRange) -> Detail {
    let value: ColoredString =
        format!("{} ({})", skipped.entry, skip_reason(&skipped.reason)).color(colors::SKIPPED);
    (String::from("Skipped"), value)
}

pub fn decision_to_details(decision: &MatchDecision) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::new();

    match &decision.matched {
        Some(entry) => details.push((String::from("Matched"), range_span(entry))),
        None => details.push((String::from("Matched"), "none".color(colors::DENIED))),
    }

    details.extend(decision.skipped.iter().map(skipped_to_detail));
    details
}
