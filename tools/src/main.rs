//! report-runner: once-a-day sales report job.
//!
//! Usage:
//!   report-runner --config settings.json
//!   report-runner --config settings.json "<p>report body html</p>"
//!
//! Database and config errors abort with a non-zero exit and no email
//! attempt. A failed send is logged to the error channel and the
//! process still exits zero — cron should not treat delivery failure
//! as a job failure.

use anyhow::Result;
use salesreport_core::{
    config::AppConfig, currency::CurrencyFormatter, mail::MailDispatcher, report::ReportBuilder,
    store::SalesStore,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "settings.json".to_string());
    let body_html = body_arg(&args).unwrap_or_else(|| "Thank You.".to_string());

    let config = AppConfig::load(&config_path)?;
    let store = SalesStore::open(&config.database.path)?;

    let builder = ReportBuilder::new(&store, CurrencyFormatter::indian());
    let substitutions = builder.build_substitutions()?;
    log::info!("built {} substitutions", substitutions.len());

    let dispatcher = MailDispatcher::new(config.mail);
    if let Err(e) = dispatcher.send_report(&substitutions, &body_html) {
        log::error!("daily report send failed: {e}");
    }
    Ok(())
}

/// First positional argument, skipping flag/value pairs.
fn body_arg(args: &[String]) -> Option<String> {
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => i += 2,
            other => return Some(other.to_string()),
        }
    }
    None
}
