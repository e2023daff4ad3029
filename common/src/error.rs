use thiserror::Error;

/// Why a string was refused as a literal address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("not a literal IPv4 or IPv6 address: '{0}'")]
    Malformed(String),
    /// Parsed, but the canonical rendering differs from the input (e.g. "192.168.1").
    #[error("address '{input}' is not in canonical form (expected '{canonical}')")]
    NonCanonical { input: String, canonical: String },
}

/// Why a string was refused as a range descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range is empty")]
    Empty,
    #[error("invalid CIDR notation: '{0}'")]
    InvalidNotation(String),
    /// The notation was accepted but its base address is not a strict literal.
    #[error("invalid base address in range '{entry}': {source}")]
    InvalidBase {
        entry: String,
        #[source]
        source: AddressError,
    },
    #[error("prefix length {prefix} exceeds {max}")]
    PrefixOutOfBounds { prefix: u8, max: u8 },
}
