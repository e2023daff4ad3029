//! # Range Set Evaluation
//!
//! Decides whether a candidate address belongs to any entry of an allow-list.
//!
//! Evaluation is fail-closed: a blank candidate, an empty list, a malformed
//! candidate or a list made only of broken entries all yield `false`. Broken
//! entries are skipped one by one, so a bad entry never hides a later match.

use ipward_common::error::RangeError;
use ipward_common::network::{
    Address, AddressFamily, RangeDescriptor, is_valid_range, trim_control,
};
use tracing::{debug, error, warn};

use crate::matcher::address_in_range;

/// Why an entry was left out of the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry is not CIDR notation.
    InvalidNotation,
    /// The notation was accepted but the descriptor could not be built.
    Internal(RangeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRange {
    pub entry: String,
    pub reason: SkipReason,
}

/// Outcome of one evaluation plus a trace of how it was reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDecision {
    /// The first range that matched, trimmed as it appeared in the list.
    pub matched: Option<String>,
    /// Entries skipped before the decision was reached.
    pub skipped: Vec<SkippedRange>,
}

impl MatchDecision {
    fn denied() -> Self {
        Self::default()
    }

    pub fn is_allowed(&self) -> bool {
        self.matched.is_some()
    }
}

/// Returns `true` iff `candidate` is a valid address inside at least one valid range.
pub fn is_in_any_range<I, S>(candidate: &str, ranges: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    evaluate(candidate, ranges).is_allowed()
}

/// Same decision as [`is_in_any_range`], with the matched range and skipped entries.
pub fn evaluate<I, S>(candidate: &str, ranges: I) -> MatchDecision
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidate: &str = trim_control(candidate);
    if candidate.is_empty() {
        warn!("Client IP is null or empty");
        return MatchDecision::denied();
    }

    let mut ranges = ranges.into_iter().peekable();
    if ranges.peek().is_none() {
        warn!("No allowed IP ranges provided");
        return MatchDecision::denied();
    }

    let address: Address = match Address::parse(candidate) {
        Ok(address) => address,
        Err(e) => {
            warn!(ip = %candidate, error = %e, "Invalid client IP format");
            return MatchDecision::denied();
        }
    };

    if address.family() == AddressFamily::V6 {
        debug!(ip = %address, "IPv6 client address, CIDR entries are IPv4 only");
    }

    let mut decision: MatchDecision = MatchDecision::denied();

    for entry in ranges {
        let entry: &str = trim_control(entry.as_ref());
        if entry.is_empty() {
            continue;
        }

        if !is_valid_range(entry) {
            warn!(range = %entry, "Invalid CIDR notation");
            decision.skipped.push(SkippedRange {
                entry: entry.to_string(),
                reason: SkipReason::InvalidNotation,
            });
            continue;
        }

        let range: RangeDescriptor = match RangeDescriptor::parse(entry) {
            Ok(range) => range,
            Err(e) => {
                error!(ip = %address, range = %entry, error = %e, "Error checking IP against CIDR range");
                decision.skipped.push(SkippedRange {
                    entry: entry.to_string(),
                    reason: SkipReason::Internal(e),
                });
                continue;
            }
        };

        if address_in_range(&address, &range) {
            debug!(ip = %address, range = %entry, "IP matches CIDR range");
            decision.matched = Some(entry.to_string());
            return decision;
        }
    }

    debug!(ip = %address, "IP does not match any allowed CIDR ranges");
    decision
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
