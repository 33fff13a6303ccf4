//! # Service Protocol Model
//!
//! The two remote-access protocols the tool can diagnose, plus the port and
//! display-name mapping the rest of the engine derives from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The service under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Remote Desktop Protocol, TCP 3389.
    Rdp,
    /// Secure Shell, TCP 22.
    Ssh,
}

impl Protocol {
    /// TCP port the service listens on.
    pub fn service_port(self) -> u16 {
        match self {
            Protocol::Ssh => 22,
            Protocol::Rdp => 3389,
        }
    }

    /// Human-readable service name used in messages and reports.
    pub fn service_name(self) -> &'static str {
        match self {
            Protocol::Ssh => "SSH",
            Protocol::Rdp => "RDP",
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    /// Parses a protocol name, case-insensitively ("rdp", "SSH", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rdp" => Ok(Protocol::Rdp),
            "ssh" => Ok(Protocol::Ssh),
            _ => Err(format!("protocol must be either \"rdp\" or \"ssh\", got: {s}")),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Rdp => write!(f, "rdp"),
            Protocol::Ssh => write!(f, "ssh"),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Protocol::from_str("rdp"), Ok(Protocol::Rdp));
        assert_eq!(Protocol::from_str("RDP"), Ok(Protocol::Rdp));
        assert_eq!(Protocol::from_str("ssh"), Ok(Protocol::Ssh));
        assert_eq!(Protocol::from_str("Ssh"), Ok(Protocol::Ssh));
        assert!(Protocol::from_str("telnet").is_err());
        assert!(Protocol::from_str("").is_err());
    }

    #[test]
    fn maps_ports_and_names() {
        assert_eq!(Protocol::Ssh.service_port(), 22);
        assert_eq!(Protocol::Rdp.service_port(), 3389);
        assert_eq!(Protocol::Ssh.service_name(), "SSH");
        assert_eq!(Protocol::Rdp.service_name(), "RDP");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Protocol::Rdp).unwrap(), "\"rdp\"");
        assert_eq!(serde_json::to_string(&Protocol::Ssh).unwrap(), "\"ssh\"");
    }
}
