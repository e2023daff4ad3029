/// Client attribute holding the comma-separated allow-list.
pub const DEFAULT_RANGES_ATTRIBUTE: &str = "allowed.ip.ranges";
pub const DEFAULT_FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";
pub const DEFAULT_REAL_IP_HEADER: &str = "X-Real-IP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the client attribute read by the policy enforcement point.
    pub ranges_attribute: String,
    /// Proxy header whose first entry is preferred as the client address.
    pub forwarded_for_header: String,
    /// Fallback proxy header, consulted when the forwarded-for header is blank.
    pub real_ip_header: String,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ranges_attribute: DEFAULT_RANGES_ATTRIBUTE.to_string(),
            forwarded_for_header: DEFAULT_FORWARDED_FOR_HEADER.to_string(),
            real_ip_header: DEFAULT_REAL_IP_HEADER.to_string(),
            no_banner: false,
            quiet: 0,
        }
    }
}
