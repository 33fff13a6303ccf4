use std::time::Duration;

/// TCP port used as the reachability baseline, independent of the tested service.
pub const CONTROL_PORT: u16 = 443;

/// Per-probe deadlines. Each probe enforces its own budget internally;
/// there is no request-wide deadline.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub dns_timeout: Duration,
    pub ping_timeout: Duration,
    /// Number of ICMP echo requests sent within the ping budget.
    pub ping_count: u32,
    pub service_timeout: Duration,
    pub control_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            dns_timeout: Duration::from_secs(5),
            ping_timeout: Duration::from_secs(5),
            ping_count: 3,
            service_timeout: Duration::from_millis(5000),
            control_timeout: Duration::from_millis(3000),
        }
    }
}
