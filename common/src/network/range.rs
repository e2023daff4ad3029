//! # Range Descriptor Model
//!
//! Parses administrator-supplied CIDR entries such as `192.168.1.0/24`.
//!
//! Textual ranges are IPv4 only. The notation check follows a fixed grammar
//! (octets `0`-`255`, prefix `0`-`32`) and runs before any address parsing.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::RangeError;
use crate::network::address::{Address, AddressFamily, trim_control};

/// A base address plus a prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeDescriptor {
    base: Address,
    prefix_len: u8,
}

impl RangeDescriptor {
    /// Builds a descriptor, checking the prefix against the base's family.
    pub fn new(base: Address, prefix_len: u8) -> Result<Self, RangeError> {
        let max: u8 = base.family().bit_len();
        if prefix_len > max {
            return Err(RangeError::PrefixOutOfBounds {
                prefix: prefix_len,
                max,
            });
        }
        Ok(Self { base, prefix_len })
    }

    /// Parses `a.b.c.d/p` after trimming surrounding whitespace and control characters.
    ///
    /// Entries that satisfy the notation grammar can still fail here when the
    /// base is not a canonical literal (e.g. `010.0.0.0/8`).
    pub fn parse(s: &str) -> Result<Self, RangeError> {
        let trimmed: &str = trim_control(s);
        if trimmed.is_empty() {
            return Err(RangeError::Empty);
        }
        if !is_valid_range(trimmed) {
            return Err(RangeError::InvalidNotation(trimmed.to_string()));
        }

        let Some((base_str, prefix_str)) = trimmed.split_once('/') else {
            return Err(RangeError::InvalidNotation(trimmed.to_string()));
        };

        let base: Address = Address::parse(base_str).map_err(|source| RangeError::InvalidBase {
            entry: trimmed.to_string(),
            source,
        })?;

        let prefix_len: u8 = prefix_str
            .parse::<u8>()
            .map_err(|_| RangeError::InvalidNotation(trimmed.to_string()))?;

        Self::new(base, prefix_len)
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn family(&self) -> AddressFamily {
        self.base.family()
    }

    /// First and last IPv4 address covered by the block.
    ///
    /// Returns `None` for IPv6 descriptors.
    pub fn v4_bounds(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        let IpAddr::V4(ip) = self.base.ip() else {
            return None;
        };
        let network: Ipv4Network = Ipv4Network::new(ip, self.prefix_len).ok()?;
        Some((network.network(), network.broadcast()))
    }
}

impl FromStr for RangeDescriptor {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

/// Returns `true` if `s` is IPv4 CIDR notation (`a.b.c.d/p`, `p` in `0..=32`).
///
/// Anything with a colon is refused, so no IPv6 range is ever accepted here.
pub fn is_valid_range(s: &str) -> bool {
    let trimmed: &str = trim_control(s);
    if trimmed.is_empty() {
        return false;
    }

    let Some((base, prefix)) = trimmed.split_once('/') else {
        return false;
    };

    let octets: Vec<&str> = base.split('.').collect();
    octets.len() == 4 && octets.iter().all(|o| is_octet(o)) && is_prefix(prefix)
}

/// `25[0-5] | 2[0-4][0-9] | [01]?[0-9][0-9]?`
fn is_octet(s: &str) -> bool {
    let b: &[u8] = s.as_bytes();
    if b.is_empty() || !b.iter().all(u8::is_ascii_digit) {
        return false;
    }
    match b.len() {
        1 | 2 => true,
        3 => match b[0] {
            b'0' | b'1' => true,
            b'2' => b[1] < b'5' || (b[1] == b'5' && b[2] <= b'5'),
            _ => false,
        },
        _ => false,
    }
}

/// `[0-9] | [1-2][0-9] | 3[0-2]`
fn is_prefix(s: &str) -> bool {
    let b: &[u8] = s.as_bytes();
    if b.is_empty() || !b.iter().all(u8::is_ascii_digit) {
        return false;
    }
    match b.len() {
        1 => true,
        2 => match b[0] {
            b'1' | b'2' => true,
            b'3' => b[1] <= b'2',
            _ => false,
        },
        _ => false,
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
