//! The client policy executor that gates token issuance on the caller's address.
//!
//! Only token endpoint events are checked. The allow-list is read from a
//! client attribute holding comma-separated CIDR entries, and a non-match is
//! turned into a [`PolicyRejection`] carrying the reason code and status the
//! token endpoint answers with.

use std::collections::HashMap;

use ipward_common::config::Config;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::evaluator;
use crate::policy::request::{RequestContext, resolve_client_ip};

pub const PROVIDER_ID: &str = "ip-allowlist-client";

/// The stage of the authorization flow the executor is called for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyEvent {
    TokenRequest,
    ServiceAccountTokenRequest,
    /// Any other event, named for logging.
    Other(String),
}

impl PolicyEvent {
    pub fn is_token_endpoint(&self) -> bool {
        matches!(
            self,
            PolicyEvent::TokenRequest | PolicyEvent::ServiceAccountTokenRequest
        )
    }
}

/// The registered client a request is made for.
#[derive(Debug, Clone, Default)]
pub struct ClientModel {
    pub client_id: String,
    attributes: HashMap<String, String>,
}

impl ClientModel {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Entries of the allow-list attribute, split on commas and left untrimmed.
    ///
    /// Returns `None` when the attribute is absent or empty.
    pub fn allowed_ranges(&self, cfg: &Config) -> Option<Vec<&str>> {
        self.attribute(&cfg.ranges_attribute)
            .filter(|raw| !raw.is_empty())
            .map(|raw| raw.split(',').collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyRejection {
    #[error("Access denied from IpAllowlistExecutor: Unable to determine client IP")]
    UnknownClientIp,
    #[error("Access denied from IpAllowlistExecutor: No allowed IP ranges configured")]
    NoRangesConfigured { client_id: String },
    #[error("Access denied from IpAllowlistExecutor")]
    Forbidden { ip: String },
}

impl PolicyRejection {
    /// OAuth error code returned to the caller.
    pub fn error_code(&self) -> &'static str {
        match self {
            PolicyRejection::UnknownClientIp | PolicyRejection::NoRangesConfigured { .. } => {
                "invalid_request"
            }
            PolicyRejection::Forbidden { .. } => "invalid_client",
        }
    }

    /// HTTP status returned to the caller.
    pub fn status(&self) -> u16 {
        match self {
            PolicyRejection::UnknownClientIp | PolicyRejection::NoRangesConfigured { .. } => 400,
            PolicyRejection::Forbidden { .. } => 403,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IpAllowlistExecutor {
    cfg: Config,
}

impl IpAllowlistExecutor {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn provider_id(&self) -> &'static str {
        PROVIDER_ID
    }

    /// Grants or rejects `request` for `client`.
    ///
    /// Non token-endpoint events and requests without a client pass through.
    pub fn execute_on_event(
        &self,
        event: &PolicyEvent,
        client: Option<&ClientModel>,
        request: &RequestContext,
    ) -> Result<(), PolicyRejection> {
        info!("IpAllowlistExecutor called");

        if !event.is_token_endpoint() {
            info!(event = ?event, "Ignoring non-token endpoint context");
            return Ok(());
        }

        let Some(client) = client else {
            return Ok(());
        };

        let Some(remote_ip) = resolve_client_ip(request, &self.cfg) else {
            error!("Could not determine client IP address");
            return Err(PolicyRejection::UnknownClientIp);
        };

        let Some(allowed_ranges) = client.allowed_ranges(&self.cfg) else {
            error!(client_id = %client.client_id, "No allowed IP ranges configured for client");
            return Err(PolicyRejection::NoRangesConfigured {
                client_id: client.client_id.clone(),
            });
        };

        debug!(client_id = %client.client_id, ip = %remote_ip, ranges = ?allowed_ranges, "Checking client IP");

        if evaluator::is_in_any_range(&remote_ip, &allowed_ranges) {
            info!(ip = %remote_ip, "Access granted from IpAllowlistExecutor");
            Ok(())
        } else {
            error!(ip = %remote_ip, "Access denied from IpAllowlistExecutor");
            Err(PolicyRejection::Forbidden { ip: remote_ip })
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
