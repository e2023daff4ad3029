//! Prefix matching of a single address against a single range.
//!
//! [`address_in_range`] is total over validated types. The string variant
//! exists for callers that hold raw text and treats unparsable input as a
//! caller bug, not as "no match".

use ipward_common::error::{AddressError, RangeError};
use ipward_common::network::{Address, Octets, RangeDescriptor};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("matcher called with an invalid address: {0}")]
    InvalidAddress(#[from] AddressError),
    #[error("matcher called with an invalid range: {0}")]
    InvalidRange(#[from] RangeError),
}

/// Returns `true` if the top `prefix_len` bits of `address` equal those of the range base.
///
/// Addresses of a different family never match.
pub fn address_in_range(address: &Address, range: &RangeDescriptor) -> bool {
    let candidate: Octets = address.octets();
    let network: Octets = range.base().octets();
    let candidate: &[u8] = candidate.as_ref();
    let network: &[u8] = network.as_ref();

    if candidate.len() != network.len() {
        return false;
    }

    let prefix: usize = usize::from(range.prefix_len());
    let full_bytes: usize = prefix / 8;
    let rem_bits: usize = prefix % 8;

    // prefix_len never exceeds the family's bit width
    if candidate[..full_bytes] != network[..full_bytes] {
        return false;
    }

    if rem_bits > 0 && full_bytes < candidate.len() {
        let mask: u8 = 0xFF << (8 - rem_bits);
        if candidate[full_bytes] & mask != network[full_bytes] & mask {
            return false;
        }
    }

    true
}

/// Parses both sides and runs [`address_in_range`].
///
/// Invalid input is returned as an error. Callers are expected to validate first.
pub fn address_in_range_str(ip: &str, cidr: &str) -> Result<bool, MatchError> {
    let address: Address = Address::parse(ip)?;
    let range: RangeDescriptor = RangeDescriptor::parse(cidr)?;
    Ok(address_in_range(&address, &range))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
