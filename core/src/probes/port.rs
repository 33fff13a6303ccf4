//! # TCP Connect Probe
//!
//! One parametrized primitive serves both the service-port and control-port
//! checks: a single connection attempt raced against a deadline, with the
//! socket closed on every exit path. No retries.

use std::io;
use std::time::Duration;

use gatecheck_common::outcome::{ErrorKind, ProbeOutcome};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Attempts one TCP connection to `domain:port` within `deadline`.
///
/// `label` names the port in messages ("Port 22", "Control port 443").
pub async fn probe(domain: &str, port: u16, deadline: Duration, label: &str) -> ProbeOutcome {
    debug!("connecting to {domain}:{port}");

    let target = format!("{domain}:{port}");
    match timeout(deadline, TcpStream::connect(target.as_str())).await {
        // Dropping the stream closes the socket right away.
        Ok(Ok(_stream)) => ProbeOutcome::ok(format!("{label} is open and reachable")),
        // Dropping the connect future aborts the attempt.
        Err(_elapsed) => ProbeOutcome::fail(
            ErrorKind::Timeout,
            format!("{label} timed out after {}ms", deadline.as_millis()),
        ),
        Ok(Err(e)) => classify(domain, label, &e),
    }
}

fn classify(domain: &str, label: &str, error: &io::Error) -> ProbeOutcome {
    match error.kind() {
        io::ErrorKind::ConnectionRefused => ProbeOutcome::fail(
            ErrorKind::ConnectionRefused,
            format!("{label} is closed or filtered"),
        ),
        io::ErrorKind::HostUnreachable => ProbeOutcome::fail(
            ErrorKind::HostUnreachable,
            format!("Host {domain} is unreachable"),
        ),
        _ => ProbeOutcome::fail(ErrorKind::NetworkError, format!("{label} error: {error}")),
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
