//! # ipward Core
//!
//! The address allow-list engine and the policy enforcement point built on it.
//!
//! * **[`matcher`]**: prefix comparison of one address against one range.
//! * **[`evaluator`]**: fail-closed evaluation of an address against a list of entries.
//! * **[`policy`]**: resolves the caller's address and turns a non-match into a rejection.

pub mod evaluator;
pub mod matcher;
pub mod policy;

pub use evaluator::{MatchDecision, SkipReason, SkippedRange, evaluate, is_in_any_range};
pub use matcher::{MatchError, address_in_range, address_in_range_str};
