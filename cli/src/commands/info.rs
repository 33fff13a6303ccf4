use std::time::{SystemTime, UNIX_EPOCH};

use colored::*;

pub fn info() {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    println!(
        "{} v{}",
        "gatecheck".bright_green().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("status: {}", "OK".green());
    println!("timestamp: {timestamp}");
}
