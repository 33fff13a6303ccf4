//! # ICMP Ping Probe
//!
//! Raw ICMP sockets need elevated privileges, so this probe shells out to the
//! OS `ping` utility instead. The platform-specific bits (argument spelling,
//! output text) are isolated behind a small internal contract:
//! [`PingObservation`] with an aliveness flag and an optional average latency.

use std::time::Duration;

use anyhow::Context;
use gatecheck_common::config::ProbeConfig;
use gatecheck_common::outcome::{ErrorKind, PingOutcome, ProbeOutcome};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// What one run of the ping utility told us.
struct PingObservation {
    alive: bool,
    avg_latency_ms: Option<f64>,
    raw_output: String,
}

/// Sends `cfg.ping_count` echo requests at `domain` within `cfg.ping_timeout`.
pub async fn probe(domain: &str, cfg: &ProbeConfig) -> PingOutcome {
    debug!("pinging {domain}");

    match run_system_ping(domain, cfg).await {
        Ok(obs) if obs.alive => PingOutcome {
            outcome: ProbeOutcome::ok(success_message(obs.avg_latency_ms)),
            time_ms: obs.avg_latency_ms,
            output: obs.raw_output,
        },
        Ok(obs) => PingOutcome {
            outcome: ProbeOutcome::fail(ErrorKind::PingFailure, "Ping failed - host unreachable"),
            time_ms: None,
            output: obs.raw_output,
        },
        Err(e) => PingOutcome {
            outcome: ProbeOutcome::fail(ErrorKind::PingFailure, format!("Ping error: {e:#}")),
            time_ms: None,
            output: String::new(),
        },
    }
}

/// Runs the OS ping utility once. Errors here mean the probe itself broke
/// (utility missing, spawn failure), not that the host is down.
async fn run_system_ping(domain: &str, cfg: &ProbeConfig) -> anyhow::Result<PingObservation> {
    let mut command = Command::new("ping");
    command.args(ping_args(domain, cfg));
    command.kill_on_drop(true);

    // The utility enforces the deadline itself; the outer timeout is a
    // backstop against ping builds that ignore the deadline flag.
    let backstop = cfg.ping_timeout + Duration::from_secs(2);
    let output = match timeout(backstop, command.output()).await {
        Err(_elapsed) => {
            return Ok(PingObservation {
                alive: false,
                avg_latency_ms: None,
                raw_output: String::new(),
            });
        }
        Ok(result) => result.context("failed to execute ping")?,
    };

    let raw_output = String::from_utf8_lossy(&output.stdout).to_string();
    let alive = output.status.success();
    let avg_latency_ms = parse_average_latency(&raw_output);

    Ok(PingObservation {
        alive,
        avg_latency_ms,
        raw_output,
    })
}

#[cfg(target_os = "linux")]
fn ping_args(domain: &str, cfg: &ProbeConfig) -> Vec<String> {
    vec![
        "-c".to_string(),
        cfg.ping_count.to_string(),
        "-w".to_string(),
        cfg.ping_timeout.as_secs().to_string(),
        domain.to_string(),
    ]
}

#[cfg(target_os = "macos")]
fn ping_args(domain: &str, cfg: &ProbeConfig) -> Vec<String> {
    vec![
        "-c".to_string(),
        cfg.ping_count.to_string(),
        "-t".to_string(),
        cfg.ping_timeout.as_secs().to_string(),
        domain.to_string(),
    ]
}

#[cfg(target_os = "windows")]
fn ping_args(domain: &str, cfg: &ProbeConfig) -> Vec<String> {
    vec![
        "-n".to_string(),
        cfg.ping_count.to_string(),
        "-w".to_string(),
        cfg.ping_timeout.as_millis().to_string(),
        domain.to_string(),
    ]
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn ping_args(domain: &str, cfg: &ProbeConfig) -> Vec<String> {
    vec![
        "-c".to_string(),
        cfg.ping_count.to_string(),
        domain.to_string(),
    ]
}

fn success_message(avg_latency_ms: Option<f64>) -> String {
    match avg_latency_ms {
        Some(ms) => format!("Ping successful - {ms}ms average"),
        None => "Ping successful - average unknown".to_string(),
    }
}

/// Pulls the average round-trip time out of ping's text output.
///
/// Understands the Unix statistics line
/// (`rtt min/avg/max/mdev = 0.045/0.067/0.089/0.018 ms`, BSD spells it
/// `round-trip`) and the Windows summary (`Average = 4ms`).
fn parse_average_latency(output: &str) -> Option<f64> {
    for line in output.lines() {
        if line.contains("min/avg/max") {
            let stats = line.split('=').nth(1)?.trim();
            let avg = stats.split('/').nth(1)?;
            return avg.trim().parse::<f64>().ok();
        }
        if let Some(pos) = line.find("Average =") {
            let rest = line[pos + "Average =".len()..].trim();
            let digits = rest.trim_end_matches("ms").trim();
            return digits.parse::<f64>().ok();
        }
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
