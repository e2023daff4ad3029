use std::collections::HashMap;

use ipward_common::config::Config;
use tracing::{debug, warn};

/// What the policy enforcement point can see of an incoming request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    headers: HashMap<String, String>,
    remote_addr: Option<String>,
}

impl RequestContext {
    pub fn new(remote_addr: Option<String>) -> Self {
        Self {
            headers: HashMap::new(),
            remote_addr,
        }
    }

    /// Adds a header. Names are case-insensitive and a repeated name replaces the old value.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn remote_addr(&self) -> Option<&str> {
        self.remote_addr.as_deref()
    }
}

/// Picks the client address in priority order:
/// 1. first entry of the forwarded-for header,
/// 2. the real-IP header,
/// 3. the transport peer address.
///
/// The result is not validated here. A forwarded-for header whose first entry
/// is empty yields `None` without consulting the later sources.
pub fn resolve_client_ip(request: &RequestContext, cfg: &Config) -> Option<String> {
    if let Some(forwarded_for) = non_blank(request.header(&cfg.forwarded_for_header)) {
        let first: &str = forwarded_for.split(',').next().unwrap_or_default().trim();
        if first.is_empty() {
            warn!(header = %forwarded_for, "Empty first entry in {}", cfg.forwarded_for_header);
            return None;
        }
        debug!(ip = %first, "Client IP from {}", cfg.forwarded_for_header);
        return Some(first.to_string());
    }

    if let Some(real_ip) = non_blank(request.header(&cfg.real_ip_header)) {
        let real_ip: &str = real_ip.trim();
        debug!(ip = %real_ip, "Client IP from {}", cfg.real_ip_header);
        return Some(real_ip.to_string());
    }

    if let Some(remote_addr) = non_blank(request.remote_addr()) {
        debug!(ip = %remote_addr, "Client IP from remote address");
        return Some(remote_addr.to_string());
    }

    warn!("Could not determine client IP address from any source");
    None
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
