//! Cross-crate tests for the allow-list engine and the policy enforcement point.

mod enforcement;
mod evaluation;
