//! The serialized report is the boundary contract; pin its shape.

use gatecheck_common::config::ProbeConfig;
use gatecheck_common::protocol::Protocol;
use gatecheck_core::diagnostics::run_diagnostics;
use std::time::Duration;

#[tokio::test]
async fn report_serializes_with_the_boundary_shape() {
    let cfg = ProbeConfig {
        ping_timeout: Duration::from_secs(2),
        ping_count: 1,
        service_timeout: Duration::from_secs(2),
        control_timeout: Duration::from_secs(2),
        ..ProbeConfig::default()
    };
    let report = run_diagnostics("localhost", Protocol::Ssh, &cfg)
        .await
        .unwrap();

    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["domain"], "localhost");
    assert_eq!(value["protocol"], "ssh");
    assert_eq!(value["tests"]["service"]["port"], 22);
    assert_eq!(value["tests"]["service"]["name"], "SSH");

    for probe in ["dns", "ping", "service", "control"] {
        let outcome = &value["tests"][probe];
        assert!(outcome["success"].is_boolean(), "missing success on {probe}");
        assert!(outcome["message"].is_string(), "missing message on {probe}");
        // error is present exactly on failures
        assert_eq!(
            outcome.get("error").is_some(),
            outcome["success"] == false,
            "error field mismatch on {probe}"
        );
    }

    assert!(value["verdict"]["verdict"].is_string());
    assert!(value["verdict"]["explanation"].is_string());
    assert!(value["verdict"]["recommendation"].is_string());
}

#[tokio::test]
async fn report_roundtrips_through_json() {
    let cfg = ProbeConfig {
        ping_timeout: Duration::from_secs(2),
        ping_count: 1,
        service_timeout: Duration::from_secs(2),
        control_timeout: Duration::from_secs(2),
        ..ProbeConfig::default()
    };
    let report = run_diagnostics("localhost", Protocol::Rdp, &cfg)
        .await
        .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let parsed: gatecheck_common::outcome::DiagnosticReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.domain, report.domain);
    assert_eq!(parsed.protocol, report.protocol);
    assert_eq!(parsed.verdict.verdict, report.verdict.verdict);
}
