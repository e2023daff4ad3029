#![cfg(test)]
use ipward_common::network::{is_valid_address, is_valid_range};
use ipward_core::{SkipReason, evaluate, is_in_any_range};

/// The allow-list as an administrator would type it, split the way the
/// enforcement point splits it: on commas, entries left untrimmed.
fn attribute(raw: &str) -> Vec<&str> {
    raw.split(',').collect()
}

#[test]
fn private_networks_from_attribute() {
    let ranges = attribute("192.168.0.0/16, 10.0.0.0/8 ,172.16.0.0/12");

    assert!(is_in_any_range("192.168.1.100", &ranges));
    assert!(is_in_any_range("10.0.0.1", &ranges));
    assert!(is_in_any_range("172.16.0.1", &ranges));
    assert!(!is_in_any_range("8.8.8.8", &ranges));
    assert!(!is_in_any_range("203.0.113.1", &ranges));
}

#[test]
fn documentation_networks() {
    let ranges = attribute("203.0.113.0/24,198.51.100.0/24");

    assert!(is_in_any_range("203.0.113.50", &ranges));
    assert!(is_in_any_range("198.51.100.100", &ranges));
    assert!(!is_in_any_range("192.168.1.1", &ranges));
}

#[test]
fn trailing_comma_and_garbage_are_ignored() {
    let ranges = attribute("not-a-range,,10.0.0.0/33, 10.0.0.0/8,");

    let decision = evaluate("10.200.0.1", &ranges);
    assert!(decision.is_allowed());
    assert_eq!(decision.matched.as_deref(), Some("10.0.0.0/8"));
    assert_eq!(decision.skipped.len(), 2);
    assert!(decision.skipped.iter().all(|s| s.reason == SkipReason::InvalidNotation));
}

#[test]
fn invalid_entries_only_never_allow() {
    for candidate in ["192.168.1.1", "0.0.0.0", "255.255.255.255", "::1"] {
        assert!(!is_in_any_range(candidate, ["invalid-cidr", "192.168.1.0/33"]));
    }
}

#[test]
fn malformed_candidates_never_allow() {
    let everything = ["0.0.0.0/0"];
    for candidate in ["", " ", "192.168.1", "192.168.1.1.1", "256.1.1.1", "localhost", "01.2.3.4"] {
        assert!(!is_valid_address(candidate));
        assert!(
            !is_in_any_range(candidate, everything),
            "{candidate:?} must be denied"
        );
    }
}

#[test]
fn validators_agree_with_evaluation() {
    assert!(is_valid_address("192.168.1.1"));
    assert!(is_valid_range("10.0.0.0/8"));
    for bad in ["192.168.1.0/33", "192.168.1.0/", "/24", "invalid"] {
        assert!(!is_valid_range(bad));
    }
}

#[test]
fn evaluation_from_many_threads_is_consistent() {
    let ranges = attribute("192.168.0.0/16,10.0.0.0/8,172.16.0.0/12");
    let candidates = ["10.1.1.1", "8.8.8.8", "172.31.0.9", "172.32.0.9", "192.168.255.255"];
    let expected: Vec<bool> = candidates
        .iter()
        .map(|c| is_in_any_range(c, &ranges))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let got: Vec<bool> = candidates
                        .iter()
                        .map(|c| is_in_any_range(c, &ranges))
                        .collect();
                    assert_eq!(got, expected);
                }
            });
        }
    });

    assert_eq!(expected, vec![true, false, true, false, true]);
}
