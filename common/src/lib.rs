//! Shared domain types for the gatecheck diagnostics engine.
//!
//! Everything in here is a single-request-scoped value: outcomes are built once
//! by the probes, bundled into a report and never mutated afterwards.

pub mod config;
pub mod error;
pub mod outcome;
pub mod protocol;
