#![cfg(test)]
use ipward_common::config::{Config, DEFAULT_RANGES_ATTRIBUTE};
use ipward_core::policy::{
    ClientModel, IpAllowlistExecutor, PolicyEvent, PolicyRejection, RequestContext,
};

fn service_client(ranges: &str) -> ClientModel {
    ClientModel::new("billing-service").with_attribute(DEFAULT_RANGES_ATTRIBUTE, ranges)
}

/// A request that reached the server through a reverse proxy at 10.0.0.2.
fn proxied(forwarded_for: &str) -> RequestContext {
    RequestContext::new(Some(String::from("10.0.0.2"))).with_header("X-Forwarded-For", forwarded_for)
}

#[test]
fn service_account_from_office_network_is_granted() {
    let executor = IpAllowlistExecutor::new(Config::default());
    let client = service_client("203.0.113.0/24,198.51.100.0/24");

    let result = executor.execute_on_event(
        &PolicyEvent::ServiceAccountTokenRequest,
        Some(&client),
        &proxied("198.51.100.23, 10.0.0.2"),
    );

    assert_eq!(result, Ok(()));
}

#[test]
fn proxy_address_does_not_leak_into_decision() {
    let executor = IpAllowlistExecutor::new(Config::default());
    // the proxy is inside the allow-list, the real client is not
    let client = service_client("10.0.0.0/8");

    let result = executor.execute_on_event(
        &PolicyEvent::TokenRequest,
        Some(&client),
        &proxied("8.8.8.8"),
    );

    let rejection = result.unwrap_err();
    assert_eq!(rejection, PolicyRejection::Forbidden { ip: String::from("8.8.8.8") });
    assert_eq!(rejection.error_code(), "invalid_client");
    assert_eq!(rejection.status(), 403);
}

#[test]
fn garbage_forwarded_for_is_denied() {
    let executor = IpAllowlistExecutor::new(Config::default());
    let client = service_client("0.0.0.0/0");

    for header in ["unknown", "192.168.1", "evil.example.com, 10.0.0.1"] {
        let result =
            executor.execute_on_event(&PolicyEvent::TokenRequest, Some(&client), &proxied(header));
        assert!(
            matches!(result, Err(PolicyRejection::Forbidden { .. })),
            "{header:?} must be rejected"
        );
    }
}

#[test]
fn misconfigured_client_is_rejected_not_allowed() {
    let executor = IpAllowlistExecutor::new(Config::default());

    let missing = ClientModel::new("billing-service");
    let result = executor.execute_on_event(&PolicyEvent::TokenRequest, Some(&missing), &proxied("10.1.1.1"));
    assert!(matches!(result, Err(PolicyRejection::NoRangesConfigured { .. })));

    // present but unusable: every entry is skipped, so the request is forbidden
    let broken = service_client("10.0.0.0/33, office");
    let result = executor.execute_on_event(&PolicyEvent::TokenRequest, Some(&broken), &proxied("10.1.1.1"));
    assert!(matches!(result, Err(PolicyRejection::Forbidden { .. })));
}

#[test]
fn non_token_events_are_untouched() {
    let executor = IpAllowlistExecutor::new(Config::default());
    let client = service_client("10.0.0.0/8");

    let result = executor.execute_on_event(
        &PolicyEvent::Other(String::from("AuthorizationRequest")),
        Some(&client),
        &RequestContext::default(),
    );

    assert_eq!(result, Ok(()));
}
