//! End-to-end orchestrator behavior against targets that do not depend on
//! outside network state.

use gatecheck_common::config::ProbeConfig;
use gatecheck_common::outcome::ProbeOutcome;
use gatecheck_common::protocol::Protocol;
use gatecheck_core::diagnostics::run_diagnostics;
use std::time::Duration;

fn fast_config() -> ProbeConfig {
    ProbeConfig {
        dns_timeout: Duration::from_secs(5),
        ping_timeout: Duration::from_secs(2),
        ping_count: 1,
        service_timeout: Duration::from_secs(2),
        control_timeout: Duration::from_secs(2),
    }
}

fn assert_error_invariant(outcome: &ProbeOutcome) {
    assert_eq!(
        outcome.error.is_some(),
        !outcome.success,
        "error must be set exactly when the probe failed: {outcome:?}"
    );
}

#[tokio::test]
async fn localhost_run_returns_all_four_outcomes() {
    let report = run_diagnostics("localhost", Protocol::Ssh, &fast_config())
        .await
        .expect("setup must not fail for a valid domain");

    assert_eq!(report.domain, "localhost");
    assert_eq!(report.protocol, Protocol::Ssh);
    assert_eq!(report.tests.service.port, 22);
    assert_eq!(report.tests.service.name, "SSH");

    // Whatever each probe saw, all four settled and hold the invariant.
    assert_error_invariant(&report.tests.dns.outcome);
    assert_error_invariant(&report.tests.ping.outcome);
    assert_error_invariant(&report.tests.service.outcome);
    assert_error_invariant(&report.tests.control);

    assert!(!report.verdict.verdict.is_empty());
    assert!(!report.verdict.explanation.is_empty());
    assert!(!report.verdict.recommendation.is_empty());
}

#[tokio::test]
async fn failing_probes_still_produce_a_full_report() {
    // A guaranteed-NXDOMAIN target: every probe fails, nothing aborts.
    let report = run_diagnostics(
        "definitely-not-a-real-host.invalid",
        Protocol::Rdp,
        &fast_config(),
    )
    .await
    .expect("probe failures are data, not errors");

    assert!(!report.tests.dns.outcome.success);
    assert_error_invariant(&report.tests.dns.outcome);
    assert_error_invariant(&report.tests.ping.outcome);
    assert_error_invariant(&report.tests.service.outcome);
    assert_error_invariant(&report.tests.control);
    assert_eq!(report.verdict.verdict, "Domain blocked by DNS policy");
}

#[tokio::test]
async fn domain_is_trimmed_before_probing() {
    let report = run_diagnostics("  localhost  ", Protocol::Rdp, &fast_config())
        .await
        .unwrap();
    assert_eq!(report.domain, "localhost");
}

#[tokio::test]
async fn repeated_runs_agree_on_the_verdict_category() {
    let cfg = fast_config();
    let first = run_diagnostics("localhost", Protocol::Rdp, &cfg).await.unwrap();
    let second = run_diagnostics("localhost", Protocol::Rdp, &cfg).await.unwrap();
    assert_eq!(first.verdict.verdict, second.verdict.verdict);
}
