#![cfg(test)]
//! Checks the prefix matcher against `pnet`'s network arithmetic.

use std::net::Ipv4Addr;

use ipward_common::network::{Address, RangeDescriptor};
use ipward_core::address_in_range;
use pnet::ipnetwork::Ipv4Network;
use rand::Rng;

const ROUNDS: usize = 5_000;

fn matcher_says(candidate: Ipv4Addr, base: Ipv4Addr, prefix: u8) -> bool {
    let range = RangeDescriptor::new(Address::from(base), prefix).unwrap();
    address_in_range(&Address::from(candidate), &range)
}

fn oracle_says(candidate: Ipv4Addr, base: Ipv4Addr, prefix: u8) -> bool {
    Ipv4Network::new(base, prefix).unwrap().contains(candidate)
}

#[test]
fn random_addresses_agree_with_oracle() {
    let mut rng = rand::rng();

    for _ in 0..ROUNDS {
        let base = Ipv4Addr::from(rng.random::<u32>());
        let candidate = Ipv4Addr::from(rng.random::<u32>());
        let prefix: u8 = rng.random_range(0..=32);

        assert_eq!(
            matcher_says(candidate, base, prefix),
            oracle_says(candidate, base, prefix),
            "{candidate} in {base}/{prefix}"
        );
    }
}

#[test]
fn single_bit_flips_agree_with_oracle() {
    let mut rng = rand::rng();

    for _ in 0..ROUNDS {
        let base: u32 = rng.random();
        let prefix: u8 = rng.random_range(0..=32);
        let bit: u32 = rng.random_range(0..32);
        let candidate = Ipv4Addr::from(base ^ (1 << bit));
        let base = Ipv4Addr::from(base);

        // flipping bit `bit` (counted from the least significant end) is
        // inside the prefix iff 31 - bit < prefix
        let expected: bool = (31 - bit) >= u32::from(prefix);
        assert_eq!(matcher_says(candidate, base, prefix), expected);
        assert_eq!(oracle_says(candidate, base, prefix), expected);
    }
}

#[test]
fn every_prefix_length_edges() {
    let base = Ipv4Addr::new(172, 16, 0, 0);
    let base_u32: u32 = u32::from(base);

    for prefix in 0..=32u8 {
        let host_bits: u32 = 32 - u32::from(prefix);
        let mask: u32 = if prefix == 0 { 0 } else { u32::MAX << host_bits };
        let first = Ipv4Addr::from(base_u32 & mask);
        let last = Ipv4Addr::from((base_u32 & mask) | !mask);

        assert!(matcher_says(first, base, prefix), "{first} in /{prefix}");
        assert!(matcher_says(last, base, prefix), "{last} in /{prefix}");

        if prefix > 0 {
            let below = Ipv4Addr::from(u32::from(first).wrapping_sub(1));
            let above = Ipv4Addr::from(u32::from(last).wrapping_add(1));
            assert_eq!(matcher_says(below, base, prefix), oracle_says(below, base, prefix));
            assert_eq!(matcher_says(above, base, prefix), oracle_says(above, base, prefix));
        }
    }
}
