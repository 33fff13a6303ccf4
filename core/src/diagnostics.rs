//! # Diagnostic Orchestrator
//!
//! Fans out the four probes concurrently, waits for all of them (a fast DNS
//! failure does not cancel the in-flight ping or port checks — every probe is
//! useful signal on its own) and reduces the outcomes to a report.

use anyhow::ensure;
use gatecheck_common::config::{CONTROL_PORT, ProbeConfig};
use gatecheck_common::error::GatecheckError;
use gatecheck_common::outcome::{DiagnosticReport, ErrorKind, ProbeOutcome, ProbeResults, ServiceOutcome};
use gatecheck_common::protocol::Protocol;
use tracing::info;

use crate::probes::{dns, ping, port};
use crate::verdict;

/// Runs the full probe set against `domain` and derives the verdict.
///
/// Probe failures never surface here; they are part of the report. An `Err`
/// only means the run could not be set up at all.
pub async fn run_diagnostics(
    domain: &str,
    protocol: Protocol,
    cfg: &ProbeConfig,
) -> anyhow::Result<DiagnosticReport> {
    let domain = domain.trim();
    ensure!(!domain.is_empty(), GatecheckError::EmptyDomain);

    let service_port = protocol.service_port();
    let service_name = protocol.service_name();
    let service_label = format!("Port {service_port}");
    let control_label = format!("Control port {CONTROL_PORT}");

    info!("Testing {service_name} connectivity for domain: {domain}");

    let (dns, ping, service, control) = tokio::join!(
        dns::resolve(domain, cfg.dns_timeout),
        ping::probe(domain, cfg),
        port::probe(domain, service_port, cfg.service_timeout, &service_label),
        port::probe(domain, CONTROL_PORT, cfg.control_timeout, &control_label),
    );

    let tests = ProbeResults {
        dns,
        ping,
        service: ServiceOutcome {
            outcome: service,
            port: service_port,
            name: service_name.to_string(),
        },
        control: fold_unreachable(control),
    };

    let verdict = verdict::decide(protocol, &tests);

    Ok(DiagnosticReport {
        domain: domain.to_string(),
        protocol,
        tests,
        verdict,
    })
}

/// The control probe never singled out unreachable hosts; only the service
/// probe does. Kept that way so control outcomes stay comparable with the
/// historical ones.
fn fold_unreachable(mut outcome: ProbeOutcome) -> ProbeOutcome {
    if outcome.error == Some(ErrorKind::HostUnreachable) {
        outcome.error = Some(ErrorKind::NetworkError);
        outcome.message = format!("Control error: {}", outcome.message);
    }
    outcome
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
