mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init(commands.verbose);

    match commands.command {
        Commands::Info => {
            info::info();
            Ok(())
        }
        Commands::Check {
            domain,
            protocol,
            json,
        } => check::check(domain, protocol, json).await,
    }
}
