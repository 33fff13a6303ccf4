//! The four probe primitives.
//!
//! Each probe is a self-contained, independently-timed network operation that
//! never lets an error escape its boundary: every failure mode is normalized
//! into a `ProbeOutcome`.

pub mod dns;
pub mod ping;
pub mod port;
