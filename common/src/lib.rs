//! # Shared Models
//!
//! Value types and validators shared by every `ipward` crate.
//!
//! * **[`network`]**: addresses, range descriptors and their textual validators.
//! * **[`config`]**: runtime settings for the policy enforcement point.
//! * **[`error`]**: parse errors for the types above.

pub mod config;
pub mod error;
pub mod network;
