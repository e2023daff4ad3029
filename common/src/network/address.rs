//! # Client Address Model
//!
//! Parses untrusted address strings into [`Address`] values.
//!
//! Only literal forms are accepted:
//! * **IPv4**: four dot-separated decimal octets in canonical form (`192.168.1.10`).
//! * **IPv6**: colon-hex literals without an embedded dotted quad (`2001:db8::1`).
//!
//! Parsing goes through the `std::net` literal parsers and never performs a
//! name lookup, so a hostile string can not trigger outbound DNS traffic.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::AddressError;

/// Address family, which fixes the byte length of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Number of bits in an address of this family.
    pub fn bit_len(self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => write!(f, "IPv4"),
            AddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// Raw network-order bytes of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octets {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl AsRef<[u8]> for Octets {
    fn as_ref(&self) -> &[u8] {
        match self {
            Octets::V4(bytes) => bytes,
            Octets::V6(bytes) => bytes,
        }
    }
}

/// A validated literal network address.
///
/// The only way to obtain one from text is [`Address::parse`], so holding an
/// `Address` means the input already passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    ip: IpAddr,
}

impl Address {
    /// Parses `s` after [`trim_control`].
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let trimmed: &str = trim_control(s);
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }

        if let Ok(v4) = trimmed.parse::<Ipv4Addr>() {
            return parse_canonical_v4(trimmed, v4);
        }

        if looks_like_ipv6(trimmed) {
            return trimmed
                .parse::<Ipv6Addr>()
                .map(|v6| Self { ip: IpAddr::V6(v6) })
                .map_err(|_| AddressError::Malformed(trimmed.to_string()));
        }

        Err(AddressError::Malformed(trimmed.to_string()))
    }

    pub fn family(&self) -> AddressFamily {
        match self.ip {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    pub fn octets(&self) -> Octets {
        match self.ip {
            IpAddr::V4(v4) => Octets::V4(v4.octets()),
            IpAddr::V6(v6) => Octets::V6(v6.octets()),
        }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }
}

impl From<Ipv4Addr> for Address {
    fn from(v4: Ipv4Addr) -> Self {
        Self { ip: IpAddr::V4(v4) }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(v6: Ipv6Addr) -> Self {
        Self { ip: IpAddr::V6(v6) }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ip, f)
    }
}

/// Returns `true` if `s` is a literal IPv4 or IPv6 address.
pub fn is_valid_address(s: &str) -> bool {
    Address::parse(s).is_ok()
}

/// Strips leading and trailing characters at or below U+0020.
///
/// This covers ASCII whitespace plus the other control characters (`\x0B`,
/// `\0`, ...). Non-ASCII whitespace is kept and makes the input invalid.
pub fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Rejects anything whose canonical rendering is not the input itself.
///
/// Abbreviated forms like "192.168.1" must fail here rather than be completed
/// into a four-octet address.
fn parse_canonical_v4(input: &str, v4: Ipv4Addr) -> Result<Address, AddressError> {
    let canonical: String = v4.to_string();
    if canonical != input {
        return Err(AddressError::NonCanonical {
            input: input.to_string(),
            canonical,
        });
    }
    Ok(Address::from(v4))
}

/// Coarse shape check: at least one colon and no dot.
///
/// Dotted-quad suffixes (`::ffff:10.0.0.1`) are refused on purpose.
fn looks_like_ipv6(s: &str) -> bool {
    s.contains(':') && !s.contains('.')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv4_addresses() {
        assert!(is_valid_address("192.168.1.1"));
        assert!(is_valid_address("127.0.0.1"));
        assert!(is_valid_address("0.0.0.0"));
        assert!(is_valid_address("255.255.255.255"));
    }

    #[test]
    fn test_invalid_ipv4_addresses() {
        assert!(!is_valid_address("256.1.1.1"));
        assert!(!is_valid_address("192.168.1"));
        assert!(!is_valid_address("192.168.1.1.1"));
        assert!(!is_valid_address("invalid"));
        assert!(!is_valid_address("localhost"));
        assert!(!is_valid_address("010.0.0.1"));
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(Address::parse(""), Err(AddressError::Empty));
        assert_eq!(Address::parse("   "), Err(AddressError::Empty));
        assert_eq!(Address::parse("\t\n"), Err(AddressError::Empty));
        assert_eq!(Address::parse("\x0B\0"), Err(AddressError::Empty));
    }

    #[test]
    fn test_control_characters_are_trimmed() {
        assert_eq!(trim_control("\x0B10.1.2.3\x1F"), "10.1.2.3");
        assert!(is_valid_address("\x0B10.1.2.3\0"));
        assert!(is_valid_address("\x0C::1\x0B"));
        assert!(!is_valid_address("\u{00A0}10.1.2.3"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let addr = Address::parse("  10.1.2.3 ").unwrap();
        assert_eq!(addr, Address::from(Ipv4Addr::new(10, 1, 2, 3)));
        assert_eq!(addr.to_string(), "10.1.2.3");
    }

    #[test]
    fn test_valid_ipv6_addresses() {
        assert!(is_valid_address("::1"));
        assert!(is_valid_address("2001:db8::1"));
        assert!(is_valid_address("fe80::1"));
        assert!(is_valid_address("2001:0db8:0000:0000:0000:0000:0000:0001"));
    }

    #[test]
    fn test_ipv6_shape_is_not_enough() {
        assert!(!is_valid_address("::ffff:192.168.1.1"));
        assert!(!is_valid_address("not:an:address"));
        assert!(!is_valid_address("1:2:3:4:5:6:7:8:9"));
        assert!(!is_valid_address("fe80::1%eth0"));
    }

    #[test]
    fn test_family_and_octets() {
        let v4 = Address::parse("192.168.1.20").unwrap();
        assert_eq!(v4.family(), AddressFamily::V4);
        assert_eq!(v4.octets(), Octets::V4([192, 168, 1, 20]));
        assert_eq!(v4.octets().as_ref().len(), 4);

        let v6 = Address::parse("::1").unwrap();
        assert_eq!(v6.family(), AddressFamily::V6);
        assert_eq!(v6.octets().as_ref().len(), 16);
        assert_eq!(v6.octets().as_ref()[15], 1);
    }

    #[test]
    fn test_non_canonical_rendering_is_refused() {
        let v4 = Ipv4Addr::new(192, 168, 0, 1);
        assert!(parse_canonical_v4("192.168.0.1", v4).is_ok());
        assert_eq!(
            parse_canonical_v4("192.168.1", v4),
            Err(AddressError::NonCanonical {
                input: "192.168.1".to_string(),
                canonical: "192.168.0.1".to_string(),
            })
        );
    }
}
