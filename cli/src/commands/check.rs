use gatecheck_common::config::ProbeConfig;
use gatecheck_common::protocol::Protocol;
use gatecheck_core::diagnostics;

use crate::terminal::{print, spinner};

pub async fn check(domain: String, protocol: Protocol, json: bool) -> anyhow::Result<()> {
    let cfg = ProbeConfig::default();

    let pb = spinner::start(format!(
        "Probing {domain} for {} reachability ...",
        protocol.service_name()
    ));
    let report = diagnostics::run_diagnostics(&domain, protocol, &cfg).await;
    pb.finish_and_clear();
    let report = report?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print::header(&format!(
        "{} reachability for {}",
        protocol.service_name(),
        report.domain
    ));
    print::probe_line("DNS", &report.tests.dns.outcome);
    print::probe_line("Ping", &report.tests.ping.outcome);
    let service_label = format!(
        "{} ({})",
        report.tests.service.name, report.tests.service.port
    );
    print::probe_line(&service_label, &report.tests.service.outcome);
    print::probe_line("Control (443)", &report.tests.control);
    print::verdict_block(&report.verdict);

    Ok(())
}
