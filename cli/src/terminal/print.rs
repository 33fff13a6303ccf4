use colored::*;
use gatecheck_common::outcome::{ProbeOutcome, Verdict};

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let msg_len = formatted.chars().count();

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

pub fn probe_line(name: &str, outcome: &ProbeOutcome) {
    let symbol = if outcome.success {
        "[+]".green().bold()
    } else {
        "[-]".red().bold()
    };
    println!(" {} {:<14} {}", symbol, name.bold(), outcome.message);
}

pub fn verdict_block(verdict: &Verdict) {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
    println!(" {} {}", "Verdict:".bold(), verdict.verdict.yellow().bold());
    println!(" {}", verdict.explanation);
    println!(" {}", verdict.recommendation.dimmed());
}
