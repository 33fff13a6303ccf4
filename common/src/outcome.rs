//! # Probe Outcome Model
//!
//! Normalized results for the four network probes and the report bundle they
//! are assembled into. Probe failures are data, not errors: every failure mode
//! a probe can hit is captured as a [`ProbeOutcome`] with an [`ErrorKind`] tag.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::protocol::Protocol;

/// Classification of a failed probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Timeout,
    ConnectionRefused,
    HostUnreachable,
    NetworkError,
    DnsFailure,
    PingFailure,
}

/// Result of one probe. `error` is `Some` exactly when `success` is false;
/// use the constructors to keep that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    pub message: String,
}

impl ProbeOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            error: None,
            message: message.into(),
        }
    }

    pub fn fail(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(kind),
            message: message.into(),
        }
    }
}

/// DNS probe result with the resolved IPv4 address set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsOutcome {
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Ipv4Addr>,
}

/// Ping probe result with average latency and the raw utility output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingOutcome {
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<f64>,
    pub output: String,
}

/// Service-port probe result, tagged with the logical service it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOutcome {
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
    pub port: u16,
    pub name: String,
}

/// The four probe results of one diagnostic run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResults {
    pub dns: DnsOutcome,
    pub ping: PingOutcome,
    pub service: ServiceOutcome,
    pub control: ProbeOutcome,
}

/// Categorical diagnosis with presentation text, derived solely from a
/// [`ProbeResults`] and the protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub verdict: String,
    pub explanation: String,
    pub recommendation: String,
}

/// Everything one diagnostic run produced. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub domain: String,
    pub protocol: Protocol,
    pub tests: ProbeResults,
    pub verdict: Verdict,
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
    fn constructors_keep_error_invariant() {
        let ok = ProbeOutcome::ok("fine");
        assert!(ok.success);
        assert!(ok.error.is_none());

        let failed = ProbeOutcome::fail(ErrorKind::Timeout, "too slow");
        assert!(!failed.success);
        assert_eq!(failed.error, Some(ErrorKind::Timeout));
    }

    #[test]
    fn error_kinds_serialize_snake_case() {
        let json = serde_json::to_string(&ErrorKind::ConnectionRefused).unwrap();
        assert_eq!(json, "\"connection_refused\"");
        let json = serde_json::to_string(&ErrorKind::DnsFailure).unwrap();
        assert_eq!(json, "\"dns_failure\"");
    }

    #[test]
    fn successful_outcome_omits_error_field() {
        let value = serde_json::to_value(ProbeOutcome::ok("open")).unwrap();
        assert!(value.get("error").is_none());
        assert_eq!(value["success"], true);
    }

    #[test]
    fn service_outcome_flattens_probe_fields() {
        let service = ServiceOutcome {
            outcome: ProbeOutcome::fail(ErrorKind::Timeout, "Port 22 timed out"),
            port: 22,
            name: "SSH".to_string(),
        };
        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "timeout");
        assert_eq!(value["port"], 22);
        assert_eq!(value["name"], "SSH");
    }
}
