//! # Verdict Engine
//!
//! Pure reduction of the four probe outcomes to a categorical diagnosis.
//! Ordered rules, first match wins; the `match` over the summarized state
//! keeps the rule set statically exhaustive.

use gatecheck_common::outcome::{ErrorKind, ProbeResults, ServiceOutcome, Verdict};
use gatecheck_common::protocol::Protocol;

/// How the service-port probe ended, summarized for rule evaluation.
///
/// The timeout signature matters: a silent drop (timeout) points at a proxy
/// or firewall, while an active refusal proves the host is live and routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceSignal {
    Open,
    TimedOut,
    Refused,
    Failed,
}

impl From<&ServiceOutcome> for ServiceSignal {
    fn from(service: &ServiceOutcome) -> Self {
        if service.outcome.success {
            return ServiceSignal::Open;
        }
        match service.outcome.error {
            Some(ErrorKind::Timeout) => ServiceSignal::TimedOut,
            Some(ErrorKind::ConnectionRefused) => ServiceSignal::Refused,
            _ => ServiceSignal::Failed,
        }
    }
}

/// Derives the verdict for one diagnostic run. Deterministic and side-effect
/// free; exactly one rule fires for any combination of outcomes.
pub fn decide(protocol: Protocol, tests: &ProbeResults) -> Verdict {
    let name = protocol.service_name();
    let port = protocol.service_port();
    let proto_upper = protocol.to_string().to_uppercase();

    let dns_ok = tests.dns.outcome.success;
    let ping_ok = tests.ping.outcome.success;
    let signal = ServiceSignal::from(&tests.service);
    let control_ok = tests.control.success;

    use ServiceSignal::*;
    match (dns_ok, ping_ok, signal, control_ok) {
        (false, _, _, _) => Verdict {
            verdict: "Domain blocked by DNS policy".to_string(),
            explanation: format!(
                "The security proxy is blocking DNS resolution for this domain, \
                 preventing any connection attempts. Users will not be able to \
                 reach this server through your {proto_upper} proxy."
            ),
            recommendation: format!(
                "Check the proxy DNS policies and whitelist this domain if \
                 {name} access should be allowed."
            ),
        },
        (true, false, _, _) => Verdict {
            verdict: "Host unreachable (ICMP blocked)".to_string(),
            explanation: "DNS resolves but ICMP ping fails. This suggests the proxy or a \
                          firewall is blocking ICMP traffic, which may indicate broader \
                          network restrictions."
                .to_string(),
            recommendation: format!(
                "Check proxy policies for ICMP blocking. Even if {name} works, \
                 network diagnostics may be limited."
            ),
        },
        (true, true, Open, _) => Verdict {
            verdict: format!("{name} port reachable"),
            explanation: format!(
                "The {name} port ({port}) is accessible and ping works, suggesting \
                 the proxy allows {name} connections to this server. Your \
                 {proto_upper} sessions should work normally."
            ),
            recommendation: format!(
                "{name} access should work through your proxy. Monitor for any \
                 policy changes."
            ),
        },
        (true, true, TimedOut, true) => Verdict {
            verdict: format!("Zscaler/Firewall blocking {name}"),
            explanation: format!(
                "DNS resolves, ping works, and the control channel works, but the \
                 {name} port times out. This suggests the proxy or a firewall is \
                 specifically blocking {name} traffic while allowing other protocols."
            ),
            recommendation: format!(
                "Check proxy application policies for {name} blocking. You may \
                 need to whitelist the {name} protocol or port {port}."
            ),
        },
        (true, true, TimedOut, false) => Verdict {
            verdict: "Indeterminate (could be server down)".to_string(),
            explanation: format!(
                "DNS resolves and ping works, but both the {name} port and the \
                 control channel time out. The server could be down, or the \
                 specific services may not be running."
            ),
            recommendation: "Verify the server is running and accessible. Check whether the \
                             specific services are configured correctly."
                .to_string(),
        },
        (true, true, Refused, true) => Verdict {
            verdict: format!("Likely {name} port reachable"),
            explanation: format!(
                "The {name} port shows connection refused but the control channel \
                 works and ping succeeds. The port is reachable, but nothing is \
                 listening on it or a filter is rejecting connections."
            ),
            recommendation: format!(
                "Verify the {name} service is running on the target server and \
                 that port {port} is configured correctly."
            ),
        },
        _ => Verdict {
            verdict: "Connection failed".to_string(),
            explanation: "Unable to establish any connection to the server. The server may be \
                          down, the network may be broken, or the proxy may be blocking all \
                          access."
                .to_string(),
            recommendation: "Check server status, network connectivity, and proxy policies for \
                             this domain."
                .to_string(),
        },
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
