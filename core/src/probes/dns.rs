//! # DNS Resolution Probe
//!
//! Resolves the target domain through the system resolver, bounded by an
//! explicit deadline so a wedged resolver cannot hang the whole run.

use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::time::Duration;

use gatecheck_common::outcome::{DnsOutcome, ErrorKind, ProbeOutcome};
use tokio::net::lookup_host;
use tokio::time::timeout;
use tracing::debug;

/// Resolves `domain` to its IPv4 address set.
///
/// Any failure (NXDOMAIN, resolver timeout, empty IPv4 set) comes back as a
/// `dns_failure` outcome, never as an error.
pub async fn resolve(domain: &str, deadline: Duration) -> DnsOutcome {
    debug!("resolving {domain}");

    let lookup = lookup_host((domain, 0u16));
    let addresses: Vec<Ipv4Addr> = match timeout(deadline, lookup).await {
        Err(_elapsed) => {
            return failure(format!(
                "DNS resolution failed: timed out after {}s",
                deadline.as_secs()
            ));
        }
        Ok(Err(e)) => return failure(format!("DNS resolution failed: {e}")),
        Ok(Ok(addrs)) => addrs
            .filter_map(|sock| match sock.ip() {
                IpAddr::V4(ip) => Some(ip),
                IpAddr::V6(_) => None,
            })
            .collect(),
    };

    if addresses.is_empty() {
        return failure("DNS resolution failed: no IPv4 addresses found".to_string());
    }

    let joined = addresses
        .iter()
        .map(|ip| ip.to_string())
        .collect::<Vec<String>>()
        .join(", ");

    DnsOutcome {
        outcome: ProbeOutcome::ok(format!("Resolved to: {joined}")),
        addresses,
    }
}

fn failure(message: String) -> DnsOutcome {
    DnsOutcome {
        outcome: ProbeOutcome::fail(ErrorKind::DnsFailure, message),
        addresses: Vec::new(),
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
