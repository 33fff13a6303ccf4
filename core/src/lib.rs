//! Probe orchestration and diagnosis engine.
//!
//! Four independent network probes (DNS, ICMP ping, service port, control
//! port) run concurrently against a target host; a pure rule engine reduces
//! their outcomes to a single verdict. See [`diagnostics::run_diagnostics`].

pub mod diagnostics;
pub mod probes;
pub mod verdict;
