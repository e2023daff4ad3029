//! # Policy Enforcement Point
//!
//! Glue between an incoming token request and the allow-list engine.
//!
//! * **[`request`]**: the request view (headers, peer address) and client address resolution.
//! * **[`executor`]**: the client policy executor that grants or rejects the request.

pub mod executor;
pub mod request;

pub use executor::{ClientModel, IpAllowlistExecutor, PROVIDER_ID, PolicyEvent, PolicyRejection};
pub use request::{RequestContext, resolve_client_ip};
