pub mod check;
pub mod info;

use clap::{Parser, Subcommand};
use gatecheck_common::protocol::Protocol;

#[derive(Parser)]
#[command(name = "gatecheck")]
#[command(about = "Diagnoses whether a security proxy blocks RDP or SSH to a host.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about the tool
    #[command(alias = "i")]
    Info,
    /// Run the full probe set against a host
    #[command(alias = "c")]
    Check {
        /// Domain name of the server to diagnose
        domain: String,
        /// Service to test: rdp or ssh
        #[arg(short, long, default_value = "rdp")]
        protocol: Protocol,
        /// Emit the report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
